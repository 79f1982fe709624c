//! Glyph alphabet for the rain.

/// Glyphs drawn by the rain: Katakana followed by Latin capitals and digits.
pub const GLYPH_ALPHABET: &[char] = &[
    'ア', 'ァ', 'カ', 'サ', 'タ', 'ナ', 'ハ', 'マ', 'ヤ', 'ャ', 'ラ', 'ワ', 'ガ', 'ザ', 'ダ', 'バ',
    'パ', 'イ', 'ィ', 'キ', 'シ', 'チ', 'ニ', 'ヒ', 'ミ', 'リ', 'ヰ', 'ギ', 'ジ', 'ヂ', 'ビ', 'ピ',
    'ウ', 'ゥ', 'ク', 'ス', 'ツ', 'ヌ', 'フ', 'ム', 'ユ', 'ュ', 'ル', 'グ', 'ズ', 'ブ', 'ヅ', 'プ',
    'エ', 'ェ', 'ケ', 'セ', 'テ', 'ネ', 'ヘ', 'メ', 'レ', 'ヱ', 'ゲ', 'ゼ', 'デ', 'ベ', 'ペ', 'オ',
    'ォ', 'コ', 'ソ', 'ト', 'ノ', 'ホ', 'モ', 'ヨ', 'ョ', 'ロ', 'ヲ', 'ゴ', 'ゾ', 'ド', 'ボ', 'ポ',
    'ヴ', 'ッ', 'ン', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O',
    'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', '0', '1', '2', '3', '4', '5', '6', '7',
    '8', '9',
];
