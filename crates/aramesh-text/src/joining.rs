//! Contextual presentation forms for the Arabic script.
//!
//! Maps context-free letters (U+0600 block) to their isolated, final,
//! initial, and medial presentation forms (U+FB50 and U+FE70 blocks) based
//! on the joining behavior of their neighbors. Covers the Arabic base
//! alphabet plus the Persian letters; harakat are transparent for joining
//! decisions and pass through unchanged.

const TATWEEL: char = '\u{0640}';
const LAM: char = '\u{0644}';

/// The presentation forms of one joining letter. Right-joining letters carry
/// no initial or medial form; hamza carries only its isolated form.
#[derive(Clone, Copy)]
struct Forms {
    isolated: char,
    fina: Option<char>,
    init: Option<char>,
    medi: Option<char>,
}

const fn dual(isolated: char, fina: char, init: char, medi: char) -> Forms {
    Forms {
        isolated,
        fina: Some(fina),
        init: Some(init),
        medi: Some(medi),
    }
}

const fn right(isolated: char, fina: char) -> Forms {
    Forms {
        isolated,
        fina: Some(fina),
        init: None,
        medi: None,
    }
}

fn forms(c: char) -> Option<Forms> {
    Some(match c {
        // Hamza never joins.
        '\u{0621}' => Forms {
            isolated: '\u{FE80}',
            fina: None,
            init: None,
            medi: None,
        },
        '\u{0622}' => right('\u{FE81}', '\u{FE82}'),
        '\u{0623}' => right('\u{FE83}', '\u{FE84}'),
        '\u{0624}' => right('\u{FE85}', '\u{FE86}'),
        '\u{0625}' => right('\u{FE87}', '\u{FE88}'),
        '\u{0626}' => dual('\u{FE89}', '\u{FE8A}', '\u{FE8B}', '\u{FE8C}'),
        '\u{0627}' => right('\u{FE8D}', '\u{FE8E}'),
        '\u{0628}' => dual('\u{FE8F}', '\u{FE90}', '\u{FE91}', '\u{FE92}'),
        '\u{0629}' => right('\u{FE93}', '\u{FE94}'),
        '\u{062A}' => dual('\u{FE95}', '\u{FE96}', '\u{FE97}', '\u{FE98}'),
        '\u{062B}' => dual('\u{FE99}', '\u{FE9A}', '\u{FE9B}', '\u{FE9C}'),
        '\u{062C}' => dual('\u{FE9D}', '\u{FE9E}', '\u{FE9F}', '\u{FEA0}'),
        '\u{062D}' => dual('\u{FEA1}', '\u{FEA2}', '\u{FEA3}', '\u{FEA4}'),
        '\u{062E}' => dual('\u{FEA5}', '\u{FEA6}', '\u{FEA7}', '\u{FEA8}'),
        '\u{062F}' => right('\u{FEA9}', '\u{FEAA}'),
        '\u{0630}' => right('\u{FEAB}', '\u{FEAC}'),
        '\u{0631}' => right('\u{FEAD}', '\u{FEAE}'),
        '\u{0632}' => right('\u{FEAF}', '\u{FEB0}'),
        '\u{0633}' => dual('\u{FEB1}', '\u{FEB2}', '\u{FEB3}', '\u{FEB4}'),
        '\u{0634}' => dual('\u{FEB5}', '\u{FEB6}', '\u{FEB7}', '\u{FEB8}'),
        '\u{0635}' => dual('\u{FEB9}', '\u{FEBA}', '\u{FEBB}', '\u{FEBC}'),
        '\u{0636}' => dual('\u{FEBD}', '\u{FEBE}', '\u{FEBF}', '\u{FEC0}'),
        '\u{0637}' => dual('\u{FEC1}', '\u{FEC2}', '\u{FEC3}', '\u{FEC4}'),
        '\u{0638}' => dual('\u{FEC5}', '\u{FEC6}', '\u{FEC7}', '\u{FEC8}'),
        '\u{0639}' => dual('\u{FEC9}', '\u{FECA}', '\u{FECB}', '\u{FECC}'),
        '\u{063A}' => dual('\u{FECD}', '\u{FECE}', '\u{FECF}', '\u{FED0}'),
        '\u{0641}' => dual('\u{FED1}', '\u{FED2}', '\u{FED3}', '\u{FED4}'),
        '\u{0642}' => dual('\u{FED5}', '\u{FED6}', '\u{FED7}', '\u{FED8}'),
        '\u{0643}' => dual('\u{FED9}', '\u{FEDA}', '\u{FEDB}', '\u{FEDC}'),
        '\u{0644}' => dual('\u{FEDD}', '\u{FEDE}', '\u{FEDF}', '\u{FEE0}'),
        '\u{0645}' => dual('\u{FEE1}', '\u{FEE2}', '\u{FEE3}', '\u{FEE4}'),
        '\u{0646}' => dual('\u{FEE5}', '\u{FEE6}', '\u{FEE7}', '\u{FEE8}'),
        '\u{0647}' => dual('\u{FEE9}', '\u{FEEA}', '\u{FEEB}', '\u{FEEC}'),
        '\u{0648}' => right('\u{FEED}', '\u{FEEE}'),
        '\u{0649}' => right('\u{FEEF}', '\u{FEF0}'),
        '\u{064A}' => dual('\u{FEF1}', '\u{FEF2}', '\u{FEF3}', '\u{FEF4}'),
        // Persian letters.
        '\u{067E}' => dual('\u{FB56}', '\u{FB57}', '\u{FB58}', '\u{FB59}'),
        '\u{0686}' => dual('\u{FB7A}', '\u{FB7B}', '\u{FB7C}', '\u{FB7D}'),
        '\u{0698}' => right('\u{FB8A}', '\u{FB8B}'),
        '\u{06A9}' => dual('\u{FB8E}', '\u{FB8F}', '\u{FB90}', '\u{FB91}'),
        '\u{06AF}' => dual('\u{FB92}', '\u{FB93}', '\u{FB94}', '\u{FB95}'),
        '\u{06C0}' => right('\u{FBA4}', '\u{FBA5}'),
        '\u{06CC}' => dual('\u{FBFC}', '\u{FBFD}', '\u{FBFE}', '\u{FBFF}'),
        _ => return None,
    })
}

/// Lam followed by an alef variant composes into a mandatory ligature:
/// (isolated form, final form).
fn lam_alef(alef: char) -> Option<(char, char)> {
    Some(match alef {
        '\u{0622}' => ('\u{FEF5}', '\u{FEF6}'),
        '\u{0623}' => ('\u{FEF7}', '\u{FEF8}'),
        '\u{0625}' => ('\u{FEF9}', '\u{FEFA}'),
        '\u{0627}' => ('\u{FEFB}', '\u{FEFC}'),
        _ => return None,
    })
}

/// Harakat and other combining marks: invisible to joining decisions.
fn is_transparent(c: char) -> bool {
    matches!(c, '\u{064B}'..='\u{065F}' | '\u{0670}')
}

/// Whether `c` joins to the letter after it (in logical order).
fn connects_forward(c: char) -> bool {
    c == TATWEEL || forms(c).is_some_and(|f| f.init.is_some())
}

/// Whether `c` accepts a join from the letter before it.
fn accepts_joining(c: char) -> bool {
    c == TATWEEL || forms(c).is_some_and(|f| f.fina.is_some())
}

fn prev_letter(chars: &[char], i: usize) -> Option<char> {
    chars[..i].iter().rev().copied().find(|c| !is_transparent(*c))
}

fn next_letter(chars: &[char], i: usize) -> Option<char> {
    chars[i + 1..].iter().copied().find(|c| !is_transparent(*c))
}

/// Replace context-free Arabic letters with their contextual presentation
/// forms. Non-Arabic characters pass through unchanged; the output is still
/// in logical order.
pub(crate) fn reshape(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());

    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        let Some(f) = forms(c) else {
            out.push(c);
            i += 1;
            continue;
        };

        let before = prev_letter(&chars, i).is_some_and(connects_forward);

        if c == LAM
            && let Some(next) = chars.get(i + 1)
            && let Some((isolated, fina)) = lam_alef(*next)
        {
            out.push(if before { fina } else { isolated });
            i += 2;
            continue;
        }

        let after = f.init.is_some() && next_letter(&chars, i).is_some_and(accepts_joining);
        let shaped = match (before, after) {
            (true, true) => f.medi.unwrap_or(f.isolated),
            (true, false) => f.fina.unwrap_or(f.isolated),
            (false, true) => f.init.unwrap_or(f.isolated),
            (false, false) => f.isolated,
        };
        out.push(shaped);
        i += 1;
    }

    out
}
