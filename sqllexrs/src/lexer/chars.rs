//! Byte classification driving tokenizer dispatch.
//!
//! One entry per byte value. Bytes >= 0x80 are word constituents, so
//! multi-byte UTF-8 sequences stay inside word lexemes and every token
//! boundary falls on a char boundary.

/// Lexical class of a single input byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CharClass {
    /// Space, tab, newline, carriage return, vertical tab, form feed.
    Whitespace,
    /// `'` - opens a string literal.
    SingleQuote,
    /// `"` - opens a string literal.
    DoubleQuote,
    /// Backtick - opens a quoted identifier.
    Backtick,
    /// `#` - opens a line comment.
    Hash,
    /// `-` - operator, or line comment when doubled before whitespace.
    Dash,
    /// `/` - operator, or block comment opener before `*`.
    Slash,
    /// ASCII digit.
    Digit,
    /// Identifier/keyword constituent: `[A-Za-z0-9_$]` and bytes >= 0x80.
    Word,
    /// Anything else; lexed as a (possibly multi-byte) operator.
    Operator,
}

pub(crate) const CHAR_CLASS: [CharClass; 256] = [
    CharClass::Operator, // 0
    CharClass::Operator, // 1
    CharClass::Operator, // 2
    CharClass::Operator, // 3
    CharClass::Operator, // 4
    CharClass::Operator, // 5
    CharClass::Operator, // 6
    CharClass::Operator, // 7
    CharClass::Operator, // 8
    CharClass::Whitespace, // 9 '\t'
    CharClass::Whitespace, // 10 '\n'
    CharClass::Whitespace, // 11 VT
    CharClass::Whitespace, // 12 FF
    CharClass::Whitespace, // 13 '\r'
    CharClass::Operator, // 14
    CharClass::Operator, // 15
    CharClass::Operator, // 16
    CharClass::Operator, // 17
    CharClass::Operator, // 18
    CharClass::Operator, // 19
    CharClass::Operator, // 20
    CharClass::Operator, // 21
    CharClass::Operator, // 22
    CharClass::Operator, // 23
    CharClass::Operator, // 24
    CharClass::Operator, // 25
    CharClass::Operator, // 26
    CharClass::Operator, // 27
    CharClass::Operator, // 28
    CharClass::Operator, // 29
    CharClass::Operator, // 30
    CharClass::Operator, // 31
    CharClass::Whitespace, // 32
    CharClass::Operator, // 33 '!'
    CharClass::DoubleQuote, // 34 double quote
    CharClass::Hash, // 35 '#'
    CharClass::Word, // 36 '$'
    CharClass::Operator, // 37 '%'
    CharClass::Operator, // 38 '&'
    CharClass::SingleQuote, // 39 single quote
    CharClass::Operator, // 40 '('
    CharClass::Operator, // 41 ')'
    CharClass::Operator, // 42 '*'
    CharClass::Operator, // 43 '+'
    CharClass::Operator, // 44 ','
    CharClass::Dash, // 45 '-'
    CharClass::Operator, // 46 '.'
    CharClass::Slash, // 47 '/'
    CharClass::Digit, // 48 '0'
    CharClass::Digit, // 49 '1'
    CharClass::Digit, // 50 '2'
    CharClass::Digit, // 51 '3'
    CharClass::Digit, // 52 '4'
    CharClass::Digit, // 53 '5'
    CharClass::Digit, // 54 '6'
    CharClass::Digit, // 55 '7'
    CharClass::Digit, // 56 '8'
    CharClass::Digit, // 57 '9'
    CharClass::Operator, // 58 ':'
    CharClass::Operator, // 59 ';'
    CharClass::Operator, // 60 '<'
    CharClass::Operator, // 61 '='
    CharClass::Operator, // 62 '>'
    CharClass::Operator, // 63 '?'
    CharClass::Operator, // 64 '@'
    CharClass::Word, // 65 'A'
    CharClass::Word, // 66 'B'
    CharClass::Word, // 67 'C'
    CharClass::Word, // 68 'D'
    CharClass::Word, // 69 'E'
    CharClass::Word, // 70 'F'
    CharClass::Word, // 71 'G'
    CharClass::Word, // 72 'H'
    CharClass::Word, // 73 'I'
    CharClass::Word, // 74 'J'
    CharClass::Word, // 75 'K'
    CharClass::Word, // 76 'L'
    CharClass::Word, // 77 'M'
    CharClass::Word, // 78 'N'
    CharClass::Word, // 79 'O'
    CharClass::Word, // 80 'P'
    CharClass::Word, // 81 'Q'
    CharClass::Word, // 82 'R'
    CharClass::Word, // 83 'S'
    CharClass::Word, // 84 'T'
    CharClass::Word, // 85 'U'
    CharClass::Word, // 86 'V'
    CharClass::Word, // 87 'W'
    CharClass::Word, // 88 'X'
    CharClass::Word, // 89 'Y'
    CharClass::Word, // 90 'Z'
    CharClass::Operator, // 91 '['
    CharClass::Operator, // 92 backslash
    CharClass::Operator, // 93 ']'
    CharClass::Operator, // 94 '^'
    CharClass::Word, // 95 '_'
    CharClass::Backtick, // 96 backtick
    CharClass::Word, // 97 'a'
    CharClass::Word, // 98 'b'
    CharClass::Word, // 99 'c'
    CharClass::Word, // 100 'd'
    CharClass::Word, // 101 'e'
    CharClass::Word, // 102 'f'
    CharClass::Word, // 103 'g'
    CharClass::Word, // 104 'h'
    CharClass::Word, // 105 'i'
    CharClass::Word, // 106 'j'
    CharClass::Word, // 107 'k'
    CharClass::Word, // 108 'l'
    CharClass::Word, // 109 'm'
    CharClass::Word, // 110 'n'
    CharClass::Word, // 111 'o'
    CharClass::Word, // 112 'p'
    CharClass::Word, // 113 'q'
    CharClass::Word, // 114 'r'
    CharClass::Word, // 115 's'
    CharClass::Word, // 116 't'
    CharClass::Word, // 117 'u'
    CharClass::Word, // 118 'v'
    CharClass::Word, // 119 'w'
    CharClass::Word, // 120 'x'
    CharClass::Word, // 121 'y'
    CharClass::Word, // 122 'z'
    CharClass::Operator, // 123 '{'
    CharClass::Operator, // 124 '|'
    CharClass::Operator, // 125 '}'
    CharClass::Operator, // 126 '~'
    CharClass::Operator, // 127
    CharClass::Word, // 128
    CharClass::Word, // 129
    CharClass::Word, // 130
    CharClass::Word, // 131
    CharClass::Word, // 132
    CharClass::Word, // 133
    CharClass::Word, // 134
    CharClass::Word, // 135
    CharClass::Word, // 136
    CharClass::Word, // 137
    CharClass::Word, // 138
    CharClass::Word, // 139
    CharClass::Word, // 140
    CharClass::Word, // 141
    CharClass::Word, // 142
    CharClass::Word, // 143
    CharClass::Word, // 144
    CharClass::Word, // 145
    CharClass::Word, // 146
    CharClass::Word, // 147
    CharClass::Word, // 148
    CharClass::Word, // 149
    CharClass::Word, // 150
    CharClass::Word, // 151
    CharClass::Word, // 152
    CharClass::Word, // 153
    CharClass::Word, // 154
    CharClass::Word, // 155
    CharClass::Word, // 156
    CharClass::Word, // 157
    CharClass::Word, // 158
    CharClass::Word, // 159
    CharClass::Word, // 160
    CharClass::Word, // 161
    CharClass::Word, // 162
    CharClass::Word, // 163
    CharClass::Word, // 164
    CharClass::Word, // 165
    CharClass::Word, // 166
    CharClass::Word, // 167
    CharClass::Word, // 168
    CharClass::Word, // 169
    CharClass::Word, // 170
    CharClass::Word, // 171
    CharClass::Word, // 172
    CharClass::Word, // 173
    CharClass::Word, // 174
    CharClass::Word, // 175
    CharClass::Word, // 176
    CharClass::Word, // 177
    CharClass::Digit, // 178
    CharClass::Digit, // 179
    CharClass::Word, // 180
    CharClass::Word, // 181
    CharClass::Word, // 182
    CharClass::Word, // 183
    CharClass::Word, // 184
    CharClass::Digit, // 185
    CharClass::Word, // 186
    CharClass::Word, // 187
    CharClass::Word, // 188
    CharClass::Word, // 189
    CharClass::Word, // 190
    CharClass::Word, // 191
    CharClass::Word, // 192
    CharClass::Word, // 193
    CharClass::Word, // 194
    CharClass::Word, // 195
    CharClass::Word, // 196
    CharClass::Word, // 197
    CharClass::Word, // 198
    CharClass::Word, // 199
    CharClass::Word, // 200
    CharClass::Word, // 201
    CharClass::Word, // 202
    CharClass::Word, // 203
    CharClass::Word, // 204
    CharClass::Word, // 205
    CharClass::Word, // 206
    CharClass::Word, // 207
    CharClass::Word, // 208
    CharClass::Word, // 209
    CharClass::Word, // 210
    CharClass::Word, // 211
    CharClass::Word, // 212
    CharClass::Word, // 213
    CharClass::Word, // 214
    CharClass::Word, // 215
    CharClass::Word, // 216
    CharClass::Word, // 217
    CharClass::Word, // 218
    CharClass::Word, // 219
    CharClass::Word, // 220
    CharClass::Word, // 221
    CharClass::Word, // 222
    CharClass::Word, // 223
    CharClass::Word, // 224
    CharClass::Word, // 225
    CharClass::Word, // 226
    CharClass::Word, // 227
    CharClass::Word, // 228
    CharClass::Word, // 229
    CharClass::Word, // 230
    CharClass::Word, // 231
    CharClass::Word, // 232
    CharClass::Word, // 233
    CharClass::Word, // 234
    CharClass::Word, // 235
    CharClass::Word, // 236
    CharClass::Word, // 237
    CharClass::Word, // 238
    CharClass::Word, // 239
    CharClass::Word, // 240
    CharClass::Word, // 241
    CharClass::Word, // 242
    CharClass::Word, // 243
    CharClass::Word, // 244
    CharClass::Word, // 245
    CharClass::Word, // 246
    CharClass::Word, // 247
    CharClass::Word, // 248
    CharClass::Word, // 249
    CharClass::Word, // 250
    CharClass::Word, // 251
    CharClass::Word, // 252
    CharClass::Word, // 253
    CharClass::Word, // 254
    CharClass::Word, // 255
];

pub(crate) fn class_of(byte: u8) -> CharClass {
    CHAR_CLASS[byte as usize]
}
