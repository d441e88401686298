//! services/survey_url.rs
//! Construcción de URLs de encuesta y reescritura del host local heredado.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{NoExpand, Regex};

// Host de desarrollo que quedó guardado en envíos antiguos.
static LEGACY_LOCALHOST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"http://localhost(:[0-9]+)?").unwrap());

/// `"{base_url}/q/{survey_id}/{lead_id}"`. No valida rangos de ids.
pub fn build_survey_url(survey_id: i32, lead_id: i64, base_url: &str) -> String {
    format!("{}/q/{}/{}", base_url, survey_id, lead_id)
}

/// Reemplaza cada `http://localhost[:puerto]` por `current_base_url`.
/// Si no hay coincidencias devuelve el mismo `&str` prestado.
pub fn rewrite_legacy_host<'a>(url: &'a str, current_base_url: &str) -> Cow<'a, str> {
    LEGACY_LOCALHOST.replace_all(url, NoExpand(current_base_url))
}

/// Sanitiza una URL almacenada para mostrarla. `None` y `""` se devuelven igual.
pub fn sanitize_url(url: Option<&str>, current_base_url: &str) -> Option<String> {
    let url = url?;
    if url.is_empty() {
        return Some(String::new());
    }

    let sanitized = rewrite_legacy_host(url, current_base_url);
    if let Cow::Owned(ref rewritten) = sanitized {
        log::debug!("URL sanitizada: {} -> {}", url, rewritten);
    }
    Some(sanitized.into_owned())
}
