use color_eyre::{
    Result,
    eyre::{bail, eyre},
};
use log::warn;
use serde::{Deserialize, Serialize};

use crate::image_model::Image;

#[derive(Debug, Serialize)]
pub struct RequestBody {
    pub instances: Instance,
    pub parameters: Parameters,
}

#[derive(Debug, Serialize)]
pub struct Instance {
    pub prompt: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameters {
    pub sample_count: u32,
}

impl RequestBody {
    /// Asks for exactly one sample
    pub fn single(prompt: &str) -> Self {
        Self {
            instances: Instance {
                prompt: prompt.into(),
            },
            parameters: Parameters { sample_count: 1 },
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ResponseBody {
    #[serde(default)]
    pub predictions: Vec<Prediction>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    #[serde(default)]
    pub bytes_base64_encoded: Option<String>,

    #[serde(default)]
    pub mime_type: Option<String>,

    #[serde(default)]
    pub rai_filtered_reason: Option<String>,
}

impl ResponseBody {
    /// Decodes `predictions[0].bytesBase64Encoded`
    pub fn into_image(self) -> Result<Image> {
        let prediction = self
            .predictions
            .into_iter()
            .next()
            .ok_or(eyre!("Response contained no predictions"))?;

        match prediction {
            Prediction {
                bytes_base64_encoded: Some(encoded),
                mime_type,
                ..
            } => Image::from_base64(&encoded, mime_type.as_deref()),
            Prediction {
                rai_filtered_reason: Some(reason),
                ..
            } => {
                warn!("Image was filtered: {reason}");
                bail!("Image was filtered: {reason}")
            }
            other => bail!("Unknown response format:\n{other:#?}"),
        }
    }
}
