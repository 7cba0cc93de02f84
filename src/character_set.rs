/// Builds a 256-entry byte membership table from byte-string literals.
/// Usable in `const` position, which is where the formatters keep their
/// escape tables.
macro_rules! character_set {
    ($($bytes:literal),* $(,)?) => {{
        let mut set = [false; 256];
        $({
            const BYTES: &[u8] = $bytes;
            let mut i = 0;
            while i < BYTES.len() {
                set[BYTES[i] as usize] = true;
                i += 1;
            }
        })*
        set
    }};
}

pub(crate) use character_set;
