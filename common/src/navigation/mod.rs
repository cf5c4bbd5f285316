//! Client-side routes and the transition from the metadata screen to the API
//! configuration screen.

use serde::{Deserialize, Serialize};

use crate::model::meta::Metadata;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/metas/{id}`
    MetaShow { id: String },
    /// `/apis/{api_id}`
    ApiShow { api_id: String },
    NotFound,
}

impl Route {
    /// Matches a location pathname. Trailing slashes are ignored and empty
    /// ids do not match.
    pub fn parse(path: &str) -> Route {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            ["metas", id] => Route::MetaShow { id: id.to_string() },
            ["apis", api_id] => Route::ApiShow {
                api_id: api_id.to_string(),
            },
            _ => Route::NotFound,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::MetaShow { id } => format!("/metas/{}", id),
            Route::ApiShow { api_id } => format!("/apis/{}", api_id),
            Route::NotFound => "/".to_string(),
        }
    }
}

/// State attached to the history entry pushed on save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionState {
    pub meta: Metadata,
}

/// A history push: target pathname plus its state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Navigation {
    pub pathname: String,
    pub state: TransitionState,
}

impl Navigation {
    /// Transition to the API configuration screen of `meta.api_id`, carrying
    /// `meta` as state.
    pub fn to_api_screen(meta: &Metadata) -> Navigation {
        Navigation {
            pathname: Route::ApiShow {
                api_id: meta.api_id.clone(),
            }
            .path(),
            state: TransitionState { meta: meta.clone() },
        }
    }

    pub fn route(&self) -> Route {
        Route::parse(&self.pathname)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::column::Column;

    #[test]
    fn parses_known_routes() {
        assert_eq!(Route::parse("/metas/7"), Route::MetaShow { id: "7".to_string() });
        assert_eq!(Route::parse("/apis/9/"), Route::ApiShow { api_id: "9".to_string() });
        assert_eq!(Route::parse("/metas/"), Route::NotFound);
        assert_eq!(Route::parse("/metas/7/columns"), Route::NotFound);
        assert_eq!(Route::parse("/"), Route::NotFound);
    }

    #[test]
    fn path_is_the_inverse_of_parse() {
        for route in [
            Route::MetaShow { id: "abc".to_string() },
            Route::ApiShow { api_id: "42".to_string() },
        ] {
            assert_eq!(Route::parse(&route.path()), route);
        }
    }

    #[test]
    fn save_transition_targets_the_api_screen() {
        let meta = Metadata {
            id: "7".to_string(),
            api_id: "9".to_string(),
            columns: vec![Column::new("col_a")],
            samples: String::new(),
        };

        let nav = Navigation::to_api_screen(&meta);

        assert_eq!(nav.pathname, "/apis/9");
        assert_eq!(nav.route(), Route::ApiShow { api_id: "9".to_string() });
        assert_eq!(nav.state.meta, meta);

        let json = serde_json::to_value(&nav).unwrap();
        assert_eq!(json["state"]["meta"]["apiId"], "9");
    }
}
