use super::*;

mod pooling_tests {
    use super::pooling::{l2_normalize, masked_mean, mean_of_rows};
    use candle_core::{Device, Tensor};

    #[test]
    fn test_masked_mean_ignores_padding() {
        let device = Device::Cpu;
        // One sequence, three positions, last one padding with junk values.
        let hidden = Tensor::new(&[[[1.0f32, 2.0], [3.0, 4.0], [100.0, 200.0]]], &device)
            .expect("build hidden");
        let mask = Tensor::new(&[[1u32, 1, 0]], &device).expect("build mask");

        let pooled = masked_mean(&hidden, &mask).expect("pool");
        let row = pooled
            .squeeze(0)
            .expect("squeeze")
            .to_vec1::<f32>()
            .expect("to vec");

        assert!((row[0] - 2.0).abs() < 1e-6, "got {}", row[0]);
        assert!((row[1] - 3.0).abs() < 1e-6, "got {}", row[1]);
    }

    #[test]
    fn test_masked_mean_full_mask_is_plain_mean() {
        let device = Device::Cpu;
        let hidden =
            Tensor::new(&[[[2.0f32, 4.0], [6.0, 8.0]]], &device).expect("build hidden");
        let mask = Tensor::new(&[[1u32, 1]], &device).expect("build mask");

        let pooled = masked_mean(&hidden, &mask).expect("pool");
        let row = pooled
            .squeeze(0)
            .expect("squeeze")
            .to_vec1::<f32>()
            .expect("to vec");

        assert!((row[0] - 4.0).abs() < 1e-6);
        assert!((row[1] - 6.0).abs() < 1e-6);
    }

    #[test]
    fn test_masked_mean_all_padding_pools_to_zero() {
        let device = Device::Cpu;
        let hidden =
            Tensor::new(&[[[5.0f32, 5.0], [5.0, 5.0]]], &device).expect("build hidden");
        let mask = Tensor::new(&[[0u32, 0]], &device).expect("build mask");

        let pooled = masked_mean(&hidden, &mask).expect("pool");
        let row = pooled
            .squeeze(0)
            .expect("squeeze")
            .to_vec1::<f32>()
            .expect("to vec");

        assert_eq!(row, vec![0.0, 0.0]);
    }

    #[test]
    fn test_masked_mean_batch_rows_independent() {
        let device = Device::Cpu;
        let hidden = Tensor::new(
            &[[[2.0f32, 4.0], [6.0, 8.0]], [[1.0, 1.0], [9.0, 9.0]]],
            &device,
        )
        .expect("build hidden");
        let mask = Tensor::new(&[[1u32, 1], [1, 0]], &device).expect("build mask");

        let pooled = masked_mean(&hidden, &mask).expect("pool");
        let rows = pooled.to_vec2::<f32>().expect("to vec");

        assert!((rows[0][0] - 4.0).abs() < 1e-6);
        assert!((rows[0][1] - 6.0).abs() < 1e-6);
        assert!((rows[1][0] - 1.0).abs() < 1e-6);
        assert!((rows[1][1] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_l2_normalize_standard_vector() {
        let normalized = l2_normalize(vec![3.0, 4.0]);
        assert!((normalized[0] - 0.6).abs() < 1e-6);
        assert!((normalized[1] - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_l2_normalize_zero_vector_unchanged() {
        let normalized = l2_normalize(vec![0.0, 0.0, 0.0]);
        assert_eq!(normalized, vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_l2_normalize_empty() {
        let normalized = l2_normalize(Vec::new());
        assert!(normalized.is_empty());
    }

    #[test]
    fn test_l2_normalize_unit_norm() {
        let normalized = l2_normalize(vec![0.3, -1.2, 4.5, 0.01]);
        let norm: f32 = normalized.iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-5, "got norm = {}", norm);
    }

    #[test]
    fn test_mean_of_rows_empty() {
        assert!(mean_of_rows(&[]).is_empty());
    }

    #[test]
    fn test_mean_of_rows_single_row() {
        let rows = vec![vec![1.0, 2.0, 3.0]];
        assert_eq!(mean_of_rows(&rows), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_mean_of_rows_averages() {
        let rows = vec![vec![1.0, 3.0], vec![3.0, 5.0]];
        assert_eq!(mean_of_rows(&rows), vec![2.0, 4.0]);
    }

    #[test]
    fn test_mean_of_rows_identical_rows_fixed_point() {
        let rows = vec![vec![0.5, -0.5], vec![0.5, -0.5], vec![0.5, -0.5]];
        assert_eq!(mean_of_rows(&rows), vec![0.5, -0.5]);
    }
}

mod tokenizer_tests {
    use super::utils::{load_tokenizer, load_tokenizer_with_truncation};
    use std::path::Path;
    use tempfile::TempDir;

    #[test]
    fn test_load_tokenizer_missing_file() {
        let result = load_tokenizer(Path::new("/nonexistent/tokenizer.json"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_tokenizer_empty_directory() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let result = load_tokenizer(temp_dir.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_load_tokenizer_garbage_file() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let path = temp_dir.path().join("tokenizer.json");
        std::fs::write(&path, "not a tokenizer").expect("write garbage");

        let result = load_tokenizer(&path);
        assert!(result.is_err());
    }

    #[test]
    fn test_load_tokenizer_with_truncation_missing_file() {
        let result = load_tokenizer_with_truncation(Path::new("/nonexistent/tokenizer.json"), 512);
        assert!(result.is_err());
    }
}

mod mock_tests {
    use super::{MockEmbedder, TextEmbedder};
    use crate::embedding::error::EmbeddingError;

    #[test]
    fn test_mock_embedder_returns_registered_vector() {
        let mock = MockEmbedder::new().with_vector("hello", vec![1.0, 0.0]);
        let emb = mock.embed("hello").expect("Should embed");
        assert_eq!(emb, vec![1.0, 0.0]);
    }

    #[test]
    fn test_mock_embedder_unknown_text_fails() {
        let mock = MockEmbedder::new();
        let result = mock.embed("unregistered");
        assert!(matches!(
            result,
            Err(EmbeddingError::InferenceFailed { .. })
        ));
    }

    #[test]
    fn test_mock_embedder_failing_constructor() {
        let mock = MockEmbedder::failing("backend offline");
        let err = mock.embed("anything").unwrap_err();
        match err {
            EmbeddingError::InferenceFailed { reason } => {
                assert_eq!(reason, "backend offline");
            }
            other => panic!("Expected InferenceFailed, got {:?}", other),
        }
    }

    #[test]
    fn test_mock_embedder_batch_order() {
        let mock = MockEmbedder::new()
            .with_vector("a", vec![1.0])
            .with_vector("b", vec![2.0]);

        let batch = mock.embed_batch(&["b", "a"]).expect("Should embed batch");
        assert_eq!(batch, vec![vec![2.0], vec![1.0]]);
    }

    #[test]
    fn test_mock_embedder_batch_fails_on_any_unknown() {
        let mock = MockEmbedder::new().with_vector("a", vec![1.0]);
        let result = mock.embed_batch(&["a", "missing"]);
        assert!(result.is_err());
    }
}
