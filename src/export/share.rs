use crate::export::png::Export;

const SHARE_INTENT: &str = "https://twitter.com/intent/tweet?text=";
const HASHTAGS: &str = "#DieGuys #NFT #Crypto #Web3 #WAGMI";

/// Image plus tweet intent for a share action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SharePackage {
    pub image: Export,
    pub caption: String,
    pub url: String,
}

/// Percent-encode everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )`, byte-wise over UTF-8.
pub fn encode_uri_component(s: &str) -> String {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";
    let mut out = String::with_capacity(s.len());
    for &b in s.as_bytes() {
        let keep = b.is_ascii_alphanumeric()
            || matches!(b, b'-' | b'_' | b'.' | b'!' | b'~' | b'*' | b'\'' | b'(' | b')');
        if keep {
            out.push(char::from(b));
        } else {
            out.push('%');
            out.push(char::from(HEX[usize::from(b >> 4)]));
            out.push(char::from(HEX[usize::from(b & 0x0F)]));
        }
    }
    out
}

/// Tweet intent URL for `caption` with the fixed hashtags appended.
///
/// `None` for an empty caption.
pub fn share_url(caption: &str) -> Option<String> {
    if caption.is_empty() {
        return None;
    }
    let text = format!("{caption}\n\n{HASHTAGS}");
    Some(format!("{SHARE_INTENT}{}", encode_uri_component(&text)))
}

#[cfg(test)]
#[path = "../../tests/unit/export/share.rs"]
mod tests;
