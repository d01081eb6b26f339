//! Byte-scanning helpers shared by the batch replacer and the serialized
//! patcher.

/// `true` if `needle` occurs in `hay` starting exactly at `pos`.
#[inline]
pub(crate) fn matches_at(hay: &[u8], pos: usize, needle: &[u8], fold_case: bool) -> bool {
    let Some(window) = hay.get(pos..pos + needle.len()) else {
        return false;
    };
    if fold_case {
        window.eq_ignore_ascii_case(needle)
    } else {
        window == needle
    }
}

/// Set of bytes that may open a match, used to skip over input that cannot
/// possibly match any rule.
#[derive(Debug, Clone)]
pub(crate) struct StartSet {
    table: [bool; 256],
    /// The distinct bytes in `table`, when there are few enough to hand to
    /// `memchr`.
    few: Option<([u8; 3], usize)>,
}

impl StartSet {
    pub(crate) fn new<'p>(patterns: impl IntoIterator<Item = &'p [u8]>, fold_case: bool) -> Self {
        let mut table = [false; 256];
        for pattern in patterns {
            if let Some(&first) = pattern.first() {
                table[usize::from(first)] = true;
                if fold_case {
                    table[usize::from(first.to_ascii_lowercase())] = true;
                    table[usize::from(first.to_ascii_uppercase())] = true;
                }
            }
        }

        let mut few = [0u8; 3];
        let mut count = 0usize;
        for byte in 0..=u8::MAX {
            if table[usize::from(byte)] {
                if count == few.len() {
                    return StartSet { table, few: None };
                }
                few[count] = byte;
                count += 1;
            }
        }
        StartSet {
            table,
            few: Some((few, count)),
        }
    }

    /// Position of the first byte at or after `from` that may start a match.
    #[inline]
    pub(crate) fn next_candidate(&self, hay: &[u8], from: usize) -> Option<usize> {
        let rest = hay.get(from..)?;
        let found = match self.few {
            Some((_, 0)) => None,
            Some(([a, _, _], 1)) => memchr::memchr(a, rest),
            Some(([a, b, _], 2)) => memchr::memchr2(a, b, rest),
            Some(([a, b, c], _)) => memchr::memchr3(a, b, c, rest),
            None => rest.iter().position(|&b| self.table[usize::from(b)]),
        };
        found.map(|i| from + i)
    }
}

/// Parse the ASCII decimal run at the start of `bytes`.
///
/// Returns `(value, digit_count)`; `value` is `None` when the run overflows
/// `usize`. Returns `None` when `bytes` does not start with a digit.
pub(crate) fn leading_decimal(bytes: &[u8]) -> Option<(Option<usize>, usize)> {
    let digits = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }
    let value = bytes[..digits].iter().try_fold(0usize, |acc, &b| {
        acc.checked_mul(10)?.checked_add(usize::from(b - b'0'))
    });
    Some((value, digits))
}

/// Append the decimal rendering of `n`.
#[inline]
pub(crate) fn push_decimal(out: &mut alloc::vec::Vec<u8>, n: usize) {
    let mut buf = itoa::Buffer::new();
    out.extend_from_slice(buf.format(n).as_bytes());
}
