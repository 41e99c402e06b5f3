use crate::contact_form::Submitter;

/// Scroll offset (px) past which the header turns opaque.
pub const SCROLL_THRESHOLD_PX: f64 = 10.0;

/// How long the simulated submitter takes before reporting success.
pub const SIMULATED_SUBMIT_MS: u32 = 1_500;

/// How long the "Message Sent!" panel stays before the form comes back.
pub const SUCCESS_DISPLAY_MS: u32 = 5_000;

#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3001"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Production URL
}

/// Picks the contact form collaborator. Builds without
/// `NEUROSYNC_CONTACT_ENDPOINT` get the simulated one.
pub fn contact_submitter() -> Submitter {
    submitter_for(option_env!("NEUROSYNC_CONTACT_ENDPOINT"))
}

fn submitter_for(endpoint: Option<&str>) -> Submitter {
    match endpoint.map(str::trim) {
        Some(path) if path.starts_with("http://") || path.starts_with("https://") => {
            Submitter::Endpoint(path.to_string())
        }
        Some(path) if !path.is_empty() => {
            Submitter::Endpoint(format!("{}{}", get_backend_url(), path))
        }
        _ => Submitter::Simulated { delay_ms: SIMULATED_SUBMIT_MS },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_endpoint_means_simulated() {
        assert_eq!(submitter_for(None), Submitter::Simulated { delay_ms: 1_500 });
        assert_eq!(submitter_for(Some("  ")), Submitter::Simulated { delay_ms: 1_500 });
    }

    #[test]
    fn absolute_endpoint_is_used_verbatim() {
        assert_eq!(
            submitter_for(Some("https://api.neurosync.tech/contact")),
            Submitter::Endpoint("https://api.neurosync.tech/contact".to_string())
        );
    }

    #[test]
    fn relative_endpoint_is_joined_to_backend() {
        assert_eq!(
            submitter_for(Some("/api/contact")),
            Submitter::Endpoint(format!("{}/api/contact", get_backend_url()))
        );
    }
}
