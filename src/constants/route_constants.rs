use actix_web::http::Method;
use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Cookie the session token travels in.
pub const SESSION_COOKIE: &str = "refrain_session";

// Routes reachable without a session (path + method) as a static set
static PUBLIC_ROUTES: Lazy<HashSet<(&'static str, Method)>> = Lazy::new(|| {
    let mut set = HashSet::new();

    set.insert(("/", Method::GET));
    set.insert(("/register", Method::POST));
    set.insert(("/login/user", Method::POST));
    set.insert(("/login/admin", Method::POST));
    set.insert(("/search", Method::POST));

    set
});

// Parameterized public routes match by prefix since the concrete path
// carries an id segment.
static PUBLIC_PREFIXES: &[&str] = &["/song/", "/get_mp3/", "/album/"];

pub fn is_public(path: &str, method: &Method) -> bool {
    if PUBLIC_ROUTES.iter().any(|(p, m)| *p == path && m == method) {
        return true;
    }
    *method == Method::GET && PUBLIC_PREFIXES.iter().any(|p| path.starts_with(p))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landing_and_auth_routes_are_public() {
        assert!(is_public("/", &Method::GET));
        assert!(is_public("/register", &Method::POST));
        assert!(is_public("/login/user", &Method::POST));
        assert!(is_public("/login/admin", &Method::POST));
        assert!(is_public("/search", &Method::POST));
    }

    #[test]
    fn detail_views_are_public_by_prefix() {
        assert!(is_public("/song/7", &Method::GET));
        assert!(is_public("/get_mp3/7", &Method::GET));
        assert!(is_public("/album/3/songs", &Method::GET));
    }

    #[test]
    fn dashboards_require_a_session() {
        assert!(!is_public("/dashboard/user", &Method::GET));
        assert!(!is_public("/dashboard/creator", &Method::POST));
        assert!(!is_public("/dashboard/admin", &Method::GET));
        assert!(!is_public("/rate_song/1", &Method::POST));
        assert!(!is_public("/playlist_list", &Method::GET));
    }
}
