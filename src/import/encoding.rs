use chardetng::EncodingDetector;
use encoding_rs::{Encoding, SHIFT_JIS, UTF_8, WINDOWS_1252};
use tracing::warn;

/// 解码后的 CSV 文本及选用的编码
#[derive(Debug)]
pub struct DecodedText {
    pub text: String,
    pub encoding: &'static Encoding,
    /// 检测器给出的原始猜测
    pub detected: &'static Encoding,
}

/// 检测器猜成这些编码时，日文环境下实际多半是 Shift_JIS
fn is_shift_jis_proxy(encoding: &'static Encoding) -> bool {
    encoding == SHIFT_JIS || encoding == WINDOWS_1252
}

fn detect(bytes: &[u8]) -> &'static Encoding {
    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    detector.guess(Some(b"jp"), true)
}

/// 严格解码的候选顺序：BOM、UTF-8、检测结果、Shift_JIS
fn candidates(
    detected: &'static Encoding,
    bom: Option<&'static Encoding>,
) -> Vec<&'static Encoding> {
    let guess = if is_shift_jis_proxy(detected) {
        SHIFT_JIS
    } else {
        detected
    };

    let mut list: Vec<&'static Encoding> = Vec::with_capacity(4);
    for encoding in bom.into_iter().chain([UTF_8, guess, SHIFT_JIS]) {
        if !list.contains(&encoding) {
            list.push(encoding);
        }
    }
    list
}

/// 按优先级依次尝试：BOM、UTF-8、检测结果（含 Shift_JIS 覆盖）、Shift_JIS，
/// 都失败时用 windows-1252 兜底。
pub fn decode_scenario(bytes: &[u8]) -> DecodedText {
    let detected = detect(bytes);

    let (body, bom) = match Encoding::for_bom(bytes) {
        Some((encoding, bom_len)) => (&bytes[bom_len..], Some(encoding)),
        None => (bytes, None),
    };

    for encoding in candidates(detected, bom) {
        if let Some(text) = encoding.decode_without_bom_handling_and_without_replacement(body) {
            return DecodedText {
                text: text.into_owned(),
                encoding,
                detected,
            };
        }
    }

    let (text, _) = WINDOWS_1252.decode_without_bom_handling(body);
    warn!(
        "No strict decoding succeeded, falling back to {}",
        WINDOWS_1252.name()
    );
    DecodedText {
        text: text.into_owned(),
        encoding: WINDOWS_1252,
        detected,
    }
}
