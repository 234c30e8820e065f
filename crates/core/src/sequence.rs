//! Séquences de gènes: codes IUPAC et extraction du promoteur

use std::fmt;

/// Codes IUPAC pour les nucléotides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IupacBase {
    A,  // Adénine
    C,  // Cytosine
    G,  // Guanine
    T,  // Thymine
    R,  // A ou G (purine)
    Y,  // C ou T (pyrimidine)
    S,  // G ou C (strong)
    W,  // A ou T (weak)
    K,  // G ou T (keto)
    M,  // A ou C (amino)
    B,  // C ou G ou T
    D,  // A ou G ou T
    H,  // A ou C ou T
    V,  // A ou C ou G
    N,  // Any base
}

impl IupacBase {
    /// Convertit un caractère en base IUPAC (insensible à la casse)
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'A' => Some(IupacBase::A),
            'C' => Some(IupacBase::C),
            'G' => Some(IupacBase::G),
            'T' => Some(IupacBase::T),
            'R' => Some(IupacBase::R),
            'Y' => Some(IupacBase::Y),
            'S' => Some(IupacBase::S),
            'W' => Some(IupacBase::W),
            'K' => Some(IupacBase::K),
            'M' => Some(IupacBase::M),
            'B' => Some(IupacBase::B),
            'D' => Some(IupacBase::D),
            'H' => Some(IupacBase::H),
            'V' => Some(IupacBase::V),
            'N' => Some(IupacBase::N),
            _ => None,
        }
    }

    /// Convertit une base en caractère minuscule (alphabet du promoteur)
    pub fn as_char(self) -> char {
        match self {
            IupacBase::A => 'a',
            IupacBase::C => 'c',
            IupacBase::G => 'g',
            IupacBase::T => 't',
            IupacBase::R => 'r',
            IupacBase::Y => 'y',
            IupacBase::S => 's',
            IupacBase::W => 'w',
            IupacBase::K => 'k',
            IupacBase::M => 'm',
            IupacBase::B => 'b',
            IupacBase::D => 'd',
            IupacBase::H => 'h',
            IupacBase::V => 'v',
            IupacBase::N => 'n',
        }
    }

    /// Bases concrètes couvertes par ce code, en minuscules, dans l'ordre a, c, g, t
    pub fn expand(self) -> &'static [char] {
        match self {
            IupacBase::A => &['a'],
            IupacBase::C => &['c'],
            IupacBase::G => &['g'],
            IupacBase::T => &['t'],
            IupacBase::R => &['a', 'g'],
            IupacBase::Y => &['c', 't'],
            IupacBase::S => &['c', 'g'],
            IupacBase::W => &['a', 't'],
            IupacBase::K => &['g', 't'],
            IupacBase::M => &['a', 'c'],
            IupacBase::B => &['c', 'g', 't'],
            IupacBase::D => &['a', 'g', 't'],
            IupacBase::H => &['a', 'c', 't'],
            IupacBase::V => &['a', 'c', 'g'],
            IupacBase::N => &['a', 'c', 'g', 't'],
        }
    }
}

impl fmt::Display for IupacBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Extrait la région promotrice d'une séquence de gène.
///
/// La région promotrice est formée des caractères minuscules ASCII de la
/// séquence, dans leur ordre d'origine. Majuscules (région codante),
/// chiffres et ponctuation sont retirés; aucun caractère conservé n'est
/// modifié.
pub fn extract_promoter(sequence: &str) -> String {
    sequence.chars().filter(char::is_ascii_lowercase).collect()
}
