//! Household analysis endpoint

use axum::{
    extract::{Multipart, State},
    response::IntoResponse,
    Json,
};
use std::collections::HashMap;
use std::str::FromStr;

use super::error::ApiError;
use crate::{
    advisor::{AdvisorRequest, AppState, RoofSource},
    config::FormDefaults,
};

const PHOTO_FIELD: &str = "roof_photo";

/// Raw multipart submission: text fields plus an optional roof photo
#[derive(Debug, Default)]
pub struct AnalyzeForm {
    fields: HashMap<String, String>,
    photo: Option<Vec<u8>>,
}

impl AnalyzeForm {
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, ApiError> {
        let mut form = AnalyzeForm::default();

        while let Some(field) = multipart.next_field().await? {
            let Some(name) = field.name().map(str::to_owned) else {
                continue;
            };

            if name == PHOTO_FIELD {
                // a file input left empty still sends a part, with no filename
                let has_file = field.file_name().is_some_and(|f| !f.is_empty());
                let bytes = field.bytes().await?;
                if has_file {
                    form.photo = Some(bytes.to_vec());
                }
            } else {
                let value = field.text().await?;
                form.fields.insert(name, value);
            }
        }

        Ok(form)
    }

    pub fn with_field(mut self, name: &str, value: &str) -> Self {
        self.fields.insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_photo(mut self, bytes: Vec<u8>) -> Self {
        self.photo = Some(bytes);
        self
    }

    fn parse_or<T: FromStr>(&self, name: &str, default: T) -> Result<T, ApiError> {
        match self.fields.get(name).map(|v| v.trim()) {
            None | Some("") => Ok(default),
            Some(raw) => raw.parse().map_err(|_| {
                ApiError::ValidationError(format!("Field '{name}' has an invalid value: {raw}"))
            }),
        }
    }

    pub fn into_request(mut self, defaults: &FormDefaults) -> Result<AdvisorRequest, ApiError> {
        let dwellers = self.parse_or("dwellers", defaults.dwellers)?;
        let open_space_sq_m = self.parse_or("space", defaults.open_space_sq_m)?;
        let latitude = self.parse_or("lat", defaults.latitude)?;
        let longitude = self.parse_or("lng", defaults.longitude)?;

        let roof = match self.photo.take() {
            Some(image) => RoofSource::Photo(image),
            None => RoofSource::Manual(self.parse_or("roof_area", defaults.roof_area_sq_m)?),
        };

        Ok(AdvisorRequest {
            dwellers,
            open_space_sq_m,
            latitude,
            longitude,
            roof,
        })
    }
}

/// POST /api/analyze - Analyse a household's harvesting potential
pub async fn analyze_potential(
    State(st): State<AppState>,
    multipart: Multipart,
) -> Result<impl IntoResponse, ApiError> {
    let form = AnalyzeForm::from_multipart(multipart).await?;
    let request = form.into_request(&st.cfg.defaults)?;
    let result = st.advisor.analyze(request).await?;
    Ok(Json(result))
}
