use crate::{Device, InferError, ModelSource};
use ndarray::ArrayD;
use ort::{inputs, session::Session, value::TensorRef};
use vigil_base::Tensor;

/// A loaded ONNX inference session with a single image input and a single
/// prediction output, which is all the YOLO detect head exposes.
pub struct OnnxSession {
    session: Session,
    input_name: String,
    output_name: String,
}

impl OnnxSession {
    /// Load a model and bind it to the requested device.
    ///
    /// # Errors
    ///
    /// Returns `InferError::ModelLoad` if the model cannot be read or has an
    /// unexpected input/output signature, and `InferError::Backend` if the
    /// session builder or execution provider setup fails.
    pub fn load(model: ModelSource, device: &Device) -> Result<Self, InferError> {
        let mut builder = Session::builder().map_err(|e| {
            InferError::Backend(format!("failed to create session builder: {}", e))
        })?;

        // Map Device to ort execution providers
        builder = match device {
            Device::Cpu => {
                log::info!("using CPU execution provider");
                builder
            }
            #[cfg(feature = "cuda")]
            Device::Cuda { device_id } => {
                use ort::ep::ExecutionProvider;
                use ort::execution_providers::CUDAExecutionProvider;
                let ep = CUDAExecutionProvider::default().with_device_id(*device_id);
                let available = ep.is_available().unwrap_or(false);
                log::info!(
                    "CUDA EP requested (device_id={}), available: {}",
                    device_id,
                    available
                );
                builder
                    .with_execution_providers([ep.build()])
                    .map_err(|e| {
                        InferError::Backend(format!("CUDA execution provider failed: {}", e))
                    })?
            }
            #[cfg(not(feature = "cuda"))]
            Device::Cuda { .. } => {
                return Err(InferError::Backend(format!(
                    "device {} not supported (enable the 'cuda' feature)",
                    device
                )));
            }
        };

        let session = match model {
            ModelSource::File(path) => builder.commit_from_file(&path).map_err(|e| {
                InferError::ModelLoad(format!(
                    "failed to load model from {}: {}",
                    path.display(),
                    e
                ))
            })?,
            ModelSource::Memory(bytes) => builder.commit_from_memory(&bytes).map_err(|e| {
                InferError::ModelLoad(format!("failed to load model from memory: {}", e))
            })?,
        };

        let input_name = session
            .inputs()
            .iter()
            .map(|input| input.name().to_string())
            .next()
            .ok_or_else(|| InferError::ModelLoad("model has no inputs".to_string()))?;
        let output_name = session
            .outputs()
            .iter()
            .map(|output| output.name().to_string())
            .next()
            .ok_or_else(|| InferError::ModelLoad("model has no outputs".to_string()))?;

        Ok(Self {
            session,
            input_name,
            output_name,
        })
    }

    /// Run one inference pass.
    pub fn run(&mut self, input: Tensor<f32>) -> Result<Tensor<f32>, InferError> {
        let array = tensor_to_ndarray(input)?;
        let tensor_ref = TensorRef::from_array_view(array.view())
            .map_err(|e| InferError::Backend(format!("failed to create tensor ref: {}", e)))?;

        let outputs = self
            .session
            .run(inputs![self.input_name.as_str() => tensor_ref])
            .map_err(|e| InferError::Backend(format!("inference failed: {}", e)))?;

        let value = &outputs[self.output_name.as_str()];
        let array = value.try_extract_array::<f32>().map_err(|e| {
            InferError::Backend(format!("output '{}' is not f32: {}", self.output_name, e))
        })?;

        ndarray_to_tensor(array)
    }

    pub fn input_name(&self) -> &str {
        &self.input_name
    }

    pub fn output_name(&self) -> &str {
        &self.output_name
    }
}

/// Convert a `Tensor<f32>` into an ndarray for ort.
pub fn tensor_to_ndarray(tensor: Tensor<f32>) -> Result<ArrayD<f32>, InferError> {
    ArrayD::from_shape_vec(tensor.shape, tensor.data)
        .map_err(|e| InferError::Backend(format!("failed to create ndarray from tensor: {}", e)))
}

/// Convert an ndarray view back into a `Tensor<f32>`.
pub fn ndarray_to_tensor(
    array: ndarray::ArrayView<'_, f32, ndarray::IxDyn>,
) -> Result<Tensor<f32>, InferError> {
    let shape = array.shape().to_vec();
    let data = array.iter().copied().collect();
    Tensor::new(shape, data)
        .map_err(|e| InferError::Backend(format!("failed to create tensor: {}", e)))
}
