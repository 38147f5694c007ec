//! Pooling and normalization shared by both embedding modes.

use candle_core::{DType, Result, Tensor};

/// Mean over the token axis, restricted to positions the attention mask marks
/// as real.
///
/// `hidden` is `[batch, seq_len, hidden]`; `attention_mask` is
/// `[batch, seq_len]` with 1 for tokens and 0 for padding. Returns
/// `[batch, hidden]`. An all-padding row pools to the zero vector.
pub fn masked_mean(hidden: &Tensor, attention_mask: &Tensor) -> Result<Tensor> {
    let mask = attention_mask.to_dtype(DType::F32)?.unsqueeze(2)?;

    let summed = hidden.broadcast_mul(&mask)?.sum(1)?;
    let counts = mask.sum(1)?.maximum(1e-9)?;

    summed.broadcast_div(&counts)
}

/// Rescales to unit Euclidean length. Zero vectors come back unchanged.
pub fn l2_normalize(mut embedding: Vec<f32>) -> Vec<f32> {
    let norm: f32 = embedding.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm > 0.0 {
        for x in &mut embedding {
            *x /= norm;
        }
    }

    embedding
}

/// Component-wise mean across rows.
///
/// This is the batch-mean reduction applied over the overflow chunks of a
/// single long input. Rows must share one length.
pub fn mean_of_rows(rows: &[Vec<f32>]) -> Vec<f32> {
    let Some(first) = rows.first() else {
        return Vec::new();
    };

    if rows.len() == 1 {
        return first.clone();
    }

    let mut acc = vec![0.0f32; first.len()];
    for row in rows {
        for (slot, value) in acc.iter_mut().zip(row) {
            *slot += value;
        }
    }

    let count = rows.len() as f32;
    for slot in &mut acc {
        *slot /= count;
    }

    acc
}
