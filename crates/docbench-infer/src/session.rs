use crate::{Device, InferError};
use docbench_base::log;
use ndarray::ArrayD;
use ort::{
    inputs,
    session::{Session as OrtSession, builder::GraphOptimizationLevel},
    value::TensorRef,
};
use std::path::Path;
use std::sync::OnceLock;

static ORT_INIT: OnceLock<()> = OnceLock::new();

fn ensure_ort_init() {
    ORT_INIT.get_or_init(|| {
        let _ = ort::init().commit();
    });
}

/// A loaded ONNX layout-detection model ready to execute forward passes.
///
/// Sessions are built with full graph optimization and the execution
/// providers implied by `Device`, always falling back to CPU.
pub struct LayoutSession {
    session: OrtSession,
    input_names: Vec<String>,
    output_names: Vec<String>,
}

impl LayoutSession {
    pub fn from_file(model_path: impl AsRef<Path>, device: &Device) -> Result<Self, InferError> {
        ensure_ort_init();

        let path = model_path.as_ref();
        let mut builder = OrtSession::builder()?
            .with_optimization_level(GraphOptimizationLevel::Level3)?;

        builder = match device {
            Device::Cpu => builder.with_execution_providers([
                ort::execution_providers::CPUExecutionProvider::default().build(),
            ])?,
            #[cfg(feature = "cuda")]
            Device::Cuda { device_id } => builder.with_execution_providers([
                ort::execution_providers::CUDAExecutionProvider::default()
                    .with_device_id(*device_id)
                    .build(),
                ort::execution_providers::CPUExecutionProvider::default().build(),
            ])?,
            #[cfg(not(feature = "cuda"))]
            Device::Cuda { .. } => {
                return Err(InferError::Runtime("CUDA feature not enabled".to_string()));
            }
            #[cfg(feature = "coreml")]
            Device::CoreMl => builder.with_execution_providers([
                ort::execution_providers::CoreMLExecutionProvider::default().build(),
                ort::execution_providers::CPUExecutionProvider::default().build(),
            ])?,
            #[cfg(not(feature = "coreml"))]
            Device::CoreMl => {
                return Err(InferError::Runtime(
                    "CoreML feature not enabled".to_string(),
                ));
            }
        };

        let session = builder.commit_from_file(path).map_err(|e| {
            InferError::Ort(format!("failed to load model {}: {}", path.display(), e))
        })?;

        let input_names: Vec<String> = session
            .inputs
            .iter()
            .map(|input| input.name.to_string())
            .collect();
        let output_names: Vec<String> = session
            .outputs
            .iter()
            .map(|output| output.name.to_string())
            .collect();

        log::debug!(
            "loaded {} on {} (inputs: {:?}, outputs: {:?})",
            path.display(),
            device,
            input_names,
            output_names
        );

        Ok(Self {
            session,
            input_names,
            output_names,
        })
    }

    /// Run one forward pass over an NCHW f32 batch, feeding the model's
    /// first input. Returns the number of output values produced; the
    /// outputs themselves are not kept, this session exists to be timed.
    pub fn run(&mut self, input: &ArrayD<f32>) -> Result<usize, InferError> {
        if input.ndim() != 4 {
            return Err(InferError::Shape(format!(
                "expected NCHW input, got shape {:?}",
                input.shape()
            )));
        }

        let input_name = self
            .input_names
            .first()
            .cloned()
            .ok_or_else(|| InferError::Runtime("model has no inputs".to_string()))?;

        let tensor = TensorRef::from_array_view(input.view())
            .map_err(|e| InferError::Ort(format!("failed to create tensor ref: {}", e)))?;

        let outputs = self
            .session
            .run(inputs![input_name.as_str() => tensor])
            .map_err(|e| InferError::Ort(format!("inference failed: {}", e)))?;

        Ok(outputs.len())
    }

    pub fn input_names(&self) -> &[String] {
        &self.input_names
    }

    pub fn output_names(&self) -> &[String] {
        &self.output_names
    }
}
