use candle::{DType, Device, Result, Tensor};
use candle_core as candle;
use candle_nn::VarBuilder;
use candle_transformers::models::bert::{BertModel, Config};
use std::path::Path;
use std::sync::Arc;

struct BertEmbeddingModelImpl {
    bert: BertModel,
    hidden_size: usize,
}

impl BertEmbeddingModelImpl {
    fn load(vb: VarBuilder, config: &Config) -> Result<Self> {
        // Checkpoints prefix their tensors differently depending on how the
        // encoder was exported; try the common prefixes before the bare root.
        let bert = if vb.contains_tensor("bert.embeddings.word_embeddings.weight") {
            BertModel::load(vb.pp("bert"), config)?
        } else if vb.contains_tensor("mpnet.embeddings.word_embeddings.weight") {
            BertModel::load(vb.pp("mpnet"), config)?
        } else {
            BertModel::load(vb.clone(), config)?
        };

        Ok(Self {
            bert,
            hidden_size: config.hidden_size,
        })
    }
}

/// BERT-family encoder exposing per-token hidden states.
///
/// The classification head (if the checkpoint carries one) is ignored; the
/// caller pools the hidden states into sentence embeddings.
#[derive(Clone)]
pub struct BertEmbeddingModel(Arc<BertEmbeddingModelImpl>);

impl BertEmbeddingModel {
    /// Loads `config.json` + `model.safetensors` from `model_dir` onto `device`.
    pub fn load<P: AsRef<Path>>(model_dir: P, device: &Device) -> Result<Self> {
        let model_dir = model_dir.as_ref();
        let config_path = model_dir.join("config.json");
        let weights_path = model_dir.join("model.safetensors");

        let config_content = std::fs::read_to_string(config_path)?;
        let config: Config = serde_json::from_str(&config_content)
            .map_err(|e| candle::Error::Msg(format!("failed to parse encoder config: {e}")))?;

        let vb =
            unsafe { VarBuilder::from_mmaped_safetensors(&[weights_path], DType::F32, device)? };

        let model = BertEmbeddingModelImpl::load(vb, &config)?;

        Ok(Self(Arc::new(model)))
    }

    /// Runs the encoder; returns hidden states of shape `[batch, seq_len, hidden]`.
    pub fn forward(
        &self,
        input_ids: &Tensor,
        token_type_ids: &Tensor,
        attention_mask: Option<&Tensor>,
    ) -> Result<Tensor> {
        self.0.bert.forward(input_ids, token_type_ids, attention_mask)
    }

    /// Hidden-state width of the loaded checkpoint.
    pub fn hidden_size(&self) -> usize {
        self.0.hidden_size
    }
}
