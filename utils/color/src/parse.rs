use super::HexColorError;

/// Length of the `#` or `0x` prefix, if any.
const fn prefix_len(bytes: &[u8]) -> usize {
    if !bytes.is_empty() && bytes[0] == b'#' {
        1
    } else if bytes.len() >= 2 && bytes[0] == b'0' && (bytes[1] == b'x' || bytes[1] == b'X') {
        2
    } else {
        0
    }
}

const fn nibble(b: u8, index: usize) -> Result<u8, HexColorError> {
    match b {
        b'0'..=b'9' => Ok(b - b'0'),
        b'a'..=b'f' => Ok(b - b'a' + 10),
        b'A'..=b'F' => Ok(b - b'A' + 10),
        _ => Err(HexColorError::InvalidDigit(index)),
    }
}

const fn byte_at(bytes: &[u8], index: usize) -> Result<u8, HexColorError> {
    let hi = match nibble(bytes[index], index) {
        Ok(value) => value,
        Err(err) => return Err(err),
    };
    let lo = match nibble(bytes[index + 1], index + 1) {
        Ok(value) => value,
        Err(err) => return Err(err),
    };
    Ok((hi << 4) | lo)
}

/// Parses `#RRGGBB`, `0xRRGGBB` or `RRGGBB` into its three channels.
pub const fn parse_hex(s: &str) -> Result<[u8; 3], HexColorError> {
    let bytes = s.as_bytes();
    let offset = prefix_len(bytes);
    if bytes.len() - offset != 6 {
        return Err(HexColorError::InvalidLength);
    }

    let mut channels = [0u8; 3];
    let mut i = 0;
    while i < 3 {
        channels[i] = match byte_at(bytes, offset + i * 2) {
            Ok(value) => value,
            Err(err) => return Err(err),
        };
        i += 1;
    }
    Ok(channels)
}

/// Compile-time variant of [`parse_hex`] for constants; fails the build on bad input.
pub const fn parse_hex_const(s: &str) -> [u8; 3] {
    match parse_hex(s) {
        Ok(channels) => channels,
        Err(HexColorError::InvalidLength) => panic!("expected 6 hex digits"),
        Err(HexColorError::InvalidDigit(_)) => panic!("invalid hex digit"),
    }
}
