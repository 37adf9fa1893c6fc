//! URL construction helpers for the notification API.

use url::Url;

/// Collection path, relative to the API root.
const NOTIFICATIONS_PATH: &str = "notifications";

/// Append `tail` to the base URL's path, keeping any path prefix.
fn join_path(base: &Url, tail: &str) -> Url {
    let mut url = base.clone();
    let base_path = url.path().trim_end_matches('/').to_string();
    url.set_path(&format!("{base_path}/{tail}"));
    url.set_query(None);
    url.set_fragment(None);
    url
}

/// `GET {base}/notifications`
pub fn build_list_url(base: &Url) -> Url {
    join_path(base, NOTIFICATIONS_PATH)
}

/// `PUT {base}/notifications/{id}`
pub fn build_mark_read_url(base: &Url, id: i64) -> Url {
    join_path(base, &format!("{NOTIFICATIONS_PATH}/{id}"))
}
