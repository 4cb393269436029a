/*
    Static pad mapping: 16 pads in a 4x4 grid, row-major.
    Each pad is bound to exactly one keyboard character and one
    midi note (MIDI_START + pad index). Nothing here has state.
*/

pub const PAD_COUNT: usize = 16;
pub const MIDI_START: u8 = 64;

pub const PAD_KEYS: [char; PAD_COUNT] = [
    '3', '4', '5', '6',
    'e', 'r', 't', 'y',
    'd', 'f', 'g', 'h',
    'c', 'v', 'b', 'n',
];

pub fn key_to_pad(key: char) -> Option<u8> {
    PAD_KEYS.iter().position(|&k| k == key).map(|idx| idx as u8)
}

pub fn pad_to_note(pad: u8) -> u8 {
    MIDI_START + pad
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn verify() {
        assert_eq!(key_to_pad('3'), Some(0));
        assert_eq!(key_to_pad('e'), Some(4));
        assert_eq!(key_to_pad('n'), Some(15));
        assert_eq!(key_to_pad('z'), None);
        assert_eq!(key_to_pad('E'), None);

        assert_eq!(pad_to_note(0), 64);
        assert_eq!(pad_to_note(4), 68);
        assert_eq!(pad_to_note(15), 79);
    }

    #[test]
    fn keys_are_unique() {
        assert_eq!(PAD_KEYS.iter().unique().count(), PAD_COUNT);
    }
}
