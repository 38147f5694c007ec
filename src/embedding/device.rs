use candle_core::Device;

#[cfg(any(feature = "metal", feature = "cuda"))]
use tracing::{info, warn};

#[cfg(not(any(feature = "metal", feature = "cuda")))]
use tracing::debug;

use super::error::EmbeddingError;

/// Picks the compute device shared by every encoder (falls back to CPU).
///
/// GPU backends are compiled in via the `metal` / `cuda` cargo features and
/// tried in that order. The caller selects once and passes the device into
/// each [`BertEncoder::load`](super::BertEncoder::load) so both scorers run
/// on the same execution context.
pub fn select_device() -> Result<Device, EmbeddingError> {
    #[cfg(feature = "metal")]
    match Device::new_metal(0) {
        Ok(device) => {
            info!("Embedding on Metal GPU");
            return Ok(device);
        }
        Err(e) => warn!(error = %e, "Metal device unavailable"),
    }

    #[cfg(feature = "cuda")]
    match Device::new_cuda(0) {
        Ok(device) => {
            info!("Embedding on CUDA GPU");
            return Ok(device);
        }
        Err(e) => warn!(error = %e, "CUDA device unavailable"),
    }

    #[cfg(any(feature = "metal", feature = "cuda"))]
    warn!("No usable GPU device, embedding on CPU");

    #[cfg(not(any(feature = "metal", feature = "cuda")))]
    debug!("No GPU backend compiled, embedding on CPU");

    Ok(Device::Cpu)
}
