//! Contact URLs and emails grouped by domain token.

use crate::model::AccountsIndex;

use super::Patterns;

/// Collect every URL-like and email-like token in `text`.
///
/// URLs are keyed by their domain label (`https://www.github.com/x` →
/// `github`), emails by the first label after `@` (`a@mail.example.com` →
/// `mail`). URL shapes are tried first at each position, so a dotted local
/// part splits an address into two URL matches (`jane.doe@gmail.com` →
/// `jane.doe` and `gmail.com`). Matches whose key comes out empty are dropped.
pub fn extract_accounts(patterns: &Patterns, text: &str) -> AccountsIndex {
    let mut index = AccountsIndex::new();

    for caps in patterns.account.captures_iter(text) {
        let (matched, key) = if let Some(url) = caps.name("url") {
            let domain = caps.name("domain").map_or("", |d| d.as_str());
            (url.as_str(), domain)
        } else if let Some(email) = caps.name("email") {
            let host = caps.name("host").map_or("", |h| h.as_str());
            (email.as_str(), host.split('.').next().unwrap_or(""))
        } else {
            continue;
        };

        if !index.push(key, matched) {
            log::debug!("Dropped account match without a domain token: {}", matched);
        }
    }

    index
}
