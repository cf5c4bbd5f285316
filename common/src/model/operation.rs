use serde::{Deserialize, Serialize};

/// Behaviour of one API call bound to a dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    pub title: String,
    pub desc: String,
    pub method: HttpMethod,
    pub end_point: String,
}

impl Operation {
    /// Operation shown until operations are sourced from the API resource.
    pub fn placeholder() -> Self {
        Self {
            title: "Operación de prueba".to_string(),
            desc: "Descripción de la operación".to_string(),
            method: HttpMethod::Get,
            end_point: "test-api".to_string(),
        }
    }
}

impl Default for Operation {
    fn default() -> Self {
        Self::placeholder()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub const ALL: [HttpMethod; 4] = [
        HttpMethod::Get,
        HttpMethod::Post,
        HttpMethod::Put,
        HttpMethod::Delete,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }

    pub fn parse(raw: &str) -> Option<HttpMethod> {
        HttpMethod::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(raw))
    }
}
