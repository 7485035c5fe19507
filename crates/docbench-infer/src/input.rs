use crate::InferError;
use ndarray::ArrayD;
use rand::Rng;

/// Channel count of the layout model input.
pub const INPUT_CHANNELS: usize = 3;

/// Default height/width the layout model was exported with.
pub const DEFAULT_INPUT_HW: (usize, usize) = (1024, 1024);

/// Build a synthetic NCHW batch of uniform random values in [0, 1).
///
/// The content is irrelevant to the timing loops; only the shape matters.
pub fn random_batch(batch: usize, height: usize, width: usize) -> Result<ArrayD<f32>, InferError> {
    if batch == 0 || height == 0 || width == 0 {
        return Err(InferError::Shape(format!(
            "batch dimensions must be non-zero, got {}x{}x{}x{}",
            batch, INPUT_CHANNELS, height, width
        )));
    }

    let mut rng = rand::thread_rng();
    let len = batch * INPUT_CHANNELS * height * width;
    let data: Vec<f32> = (0..len).map(|_| rng.gen_range(0.0f32..1.0)).collect();

    ArrayD::from_shape_vec(vec![batch, INPUT_CHANNELS, height, width], data)
        .map_err(|e| InferError::Shape(e.to_string()))
}
