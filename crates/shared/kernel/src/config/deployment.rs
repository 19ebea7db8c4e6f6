use rig_domain::config::Deployment;
use tracing::warn;

/// External URL exposed by the hosting platform, checked first.
pub const EXTERNAL_URL_VARS: [&str; 2] = ["RENDER_EXTERNAL_URL", "RENDER_URL"];
/// Port of the backend serving the parts API.
pub const BACKEND_PORT_VAR: &str = "PORT";
/// Listen port of the form server.
pub const UI_PORT_VAR: &str = "UI_PORT";
/// Public-share toggle of the form server.
pub const UI_SHARE_VAR: &str = "UI_SHARE";

/// Reads the deployment variables from the process environment.
#[must_use]
pub fn deployment_from_env() -> Deployment {
    deployment_from_lookup(|key| std::env::var(key).ok())
}

/// Builds a [`Deployment`] from any key lookup.
///
/// Unparseable ports are logged and ignored. The share toggle is on only for a
/// case-insensitive `true`.
pub fn deployment_from_lookup<F>(lookup: F) -> Deployment
where
    F: Fn(&str) -> Option<String>,
{
    let external_url = EXTERNAL_URL_VARS
        .iter()
        .filter_map(|key| lookup(key))
        .find(|value| !value.trim().is_empty());

    Deployment {
        external_url,
        backend_port: port(&lookup, BACKEND_PORT_VAR),
        ui_port: port(&lookup, UI_PORT_VAR),
        share: lookup(UI_SHARE_VAR).map(|raw| raw.trim().eq_ignore_ascii_case("true")),
    }
}

fn port<F>(lookup: &F, key: &str) -> Option<u16>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)?;
    match raw.trim().parse::<u16>() {
        Ok(port) => Some(port),
        Err(e) => {
            warn!(variable = key, value = %raw, error = %e, "Ignoring invalid port");
            None
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fxhash::FxHashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: FxHashMap<String, String> =
            pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_yields_nothing() {
        assert_eq!(deployment_from_lookup(env(&[])), Deployment::default());
    }

    #[test]
    fn render_external_url_takes_precedence() {
        let d = deployment_from_lookup(env(&[
            ("RENDER_EXTERNAL_URL", "https://a.onrender.com/"),
            ("RENDER_URL", "https://b.onrender.com"),
        ]));
        assert_eq!(d.external_url.as_deref(), Some("https://a.onrender.com/"));
        assert_eq!(d.api_base_url().as_deref(), Some("https://a.onrender.com/api"));
    }

    #[test]
    fn falls_back_to_render_url() {
        let d = deployment_from_lookup(env(&[
            ("RENDER_EXTERNAL_URL", ""),
            ("RENDER_URL", "https://b.onrender.com"),
        ]));
        assert_eq!(d.external_url.as_deref(), Some("https://b.onrender.com"));
    }

    #[test]
    fn ports_and_share_are_parsed() {
        let d = deployment_from_lookup(env(&[
            ("PORT", "5001"),
            ("UI_PORT", " 7861 "),
            ("UI_SHARE", "TRUE"),
        ]));
        assert_eq!(d.backend_port, Some(5001));
        assert_eq!(d.ui_port, Some(7861));
        assert_eq!(d.share, Some(true));
        assert_eq!(d.api_base_url().as_deref(), Some("http://localhost:5001/api"));
    }

    #[test]
    fn invalid_values_are_ignored_or_false() {
        let d = deployment_from_lookup(env(&[
            ("PORT", "not-a-port"),
            ("UI_PORT", "70000"),
            ("UI_SHARE", "yes"),
        ]));
        assert_eq!(d.backend_port, None);
        assert_eq!(d.ui_port, None);
        assert_eq!(d.share, Some(false));
    }
}
