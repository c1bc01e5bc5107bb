/*!
 * # Source de décimales de pi
 *
 * Fournit les chiffres du développement décimal de pi, à la demande et
 * sans fin : quand la précision courante est épuisée, elle est étendue
 * d'un palier fixe et le développement est recalculé entièrement.
 * Recalculer depuis zéro plutôt qu'incrémentalement est un choix
 * assumé : la consommation de chiffres est lente à l'échelle de la
 * simulation, la simplicité prime.
 */

use crate::{INITIAL_PRECISION, PRECISION_STEP};

/// Flux de décimales consommé par l'agent. Le trait sert de couture
/// pour les tests, qui pilotent l'agent avec des séquences écrites à
/// la main.
pub trait DigitStream {
    /// Prochaine décimale, dans 0..=9.
    fn next_digit(&mut self) -> u8;
    /// Nombre de décimales déjà consommées (pour l'affichage).
    fn current_index(&self) -> usize;
}

/// Les chiffres significatifs de pi ("314159..."), le point décimal
/// retiré : le 3 de tête compte comme premier chiffre.
pub struct PiDigits {
    precision: usize,
    digits: Vec<u8>,
    cursor: usize,
}

impl PiDigits {
    pub fn new() -> Self {
        Self::with_precision(INITIAL_PRECISION)
    }

    /// Source démarrant à une précision donnée (en chiffres
    /// significatifs). Le développement n'est calculé qu'au premier
    /// appel de `next_digit`.
    pub fn with_precision(precision: usize) -> Self {
        assert!(precision > 0, "précision nulle");
        Self {
            precision,
            digits: Vec::new(),
            cursor: 0,
        }
    }

    /// Précision courante, en chiffres significatifs.
    pub fn precision(&self) -> usize {
        self.precision
    }

    /// Nombre de décimales déjà consommées.
    pub fn current_index(&self) -> usize {
        self.cursor
    }

    fn compute(&mut self) {
        self.digits = spigot_digits(self.precision);
    }
}

impl Default for PiDigits {
    fn default() -> Self {
        Self::new()
    }
}

impl DigitStream for PiDigits {
    fn next_digit(&mut self) -> u8 {
        if self.digits.is_empty() {
            self.compute();
        }
        if self.cursor >= self.digits.len() {
            // épuisé : on étend la précision et on recalcule tout,
            // le curseur reprend là où il était
            self.precision += PRECISION_STEP;
            self.compute();
        }
        let digit = self.digits[self.cursor];
        self.cursor += 1;
        digit
    }

    fn current_index(&self) -> usize {
        self.cursor
    }
}

/// Calcule les `n` premiers chiffres significatifs de pi par le spigot
/// de Rabinowitz-Wagon, en arithmétique entière pure.
///
/// L'algorithme travaille dans la base mixte (1; 1/3, 2/5, 3/7, ...) où
/// pi s'écrit (2; 2, 2, 2, ...) et en extrait un chiffre décimal par
/// passe de normalisation. Les chiffres sortent avec un cran de retard
/// (un 9 en attente peut devenir 0 sur une retenue), d'où le tampon de
/// pré-chiffre et la réserve d'itérations de garde en fin de course.
fn spigot_digits(n: usize) -> Vec<u8> {
    let iters = n + 32;
    let len = iters * 10 / 3 + 1;
    let mut a = vec![2u64; len];
    let mut out: Vec<u8> = Vec::with_capacity(iters + 1);
    let mut predigit = 0u64;
    let mut nines = 0usize;

    for _ in 0..iters {
        let mut q = 0u64;
        for i in (1..len).rev() {
            // la retenue qui descend de la position i+1 est pesée par
            // le numérateur de cette position, soit i+1
            let x = 10 * a[i] + q * (i as u64 + 1);
            a[i] = x % (2 * i as u64 + 1);
            q = x / (2 * i as u64 + 1);
        }
        let x = 10 * a[0] + q;
        a[0] = x % 10;
        q = x / 10;

        if q == 9 {
            nines += 1;
        } else if q == 10 {
            // retenue : le pré-chiffre monte d'un cran, les 9 en
            // attente retombent à 0
            out.push(predigit as u8 + 1);
            out.extend(std::iter::repeat(0).take(nines));
            predigit = 0;
            nines = 0;
        } else {
            out.push(predigit as u8);
            out.extend(std::iter::repeat(9).take(nines));
            predigit = q;
            nines = 0;
        }
    }
    out.push(predigit as u8);

    // le tout premier pré-chiffre émis est un zéro artificiel
    out.remove(0);
    out.truncate(n);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    // les 100 premiers chiffres significatifs de pi
    const PI_100: &str = "3141592653589793238462643383279502884197\
                          1693993751058209749445923078164062862089\
                          98628034825342117067";

    fn digits_to_string(digits: &[u8]) -> String {
        digits.iter().map(|d| char::from(b'0' + d)).collect()
    }

    #[test]
    fn test_spigot_known_prefix() {
        let digits = spigot_digits(100);
        assert_eq!(digits_to_string(&digits), PI_100);
    }

    #[test]
    fn test_pi_digits_emit_pi() {
        // la source branchée sur le spigot rejoue bien pi chiffre à
        // chiffre, le 3 de tête en premier
        let mut source = PiDigits::with_precision(100);
        let played: Vec<u8> = (0..100).map(|_| source.next_digit()).collect();
        assert_eq!(digits_to_string(&played), PI_100);
    }

    #[test]
    fn test_spigot_exact_length() {
        assert_eq!(spigot_digits(1), vec![3]);
        assert_eq!(spigot_digits(500).len(), 500);
    }

    #[test]
    fn test_determinism() {
        assert_eq!(spigot_digits(200), spigot_digits(200));
    }

    #[test]
    fn test_growth_extends_prefix() {
        // une précision plus grande ne réécrit jamais le préfixe
        let short = spigot_digits(120);
        let long = spigot_digits(620);
        assert_eq!(&long[..120], &short[..]);
    }

    #[test]
    fn test_next_digit_grows_precision() {
        let mut source = PiDigits::with_precision(20);
        let first: Vec<u8> = (0..20).map(|_| source.next_digit()).collect();
        assert_eq!(source.precision(), 20);

        // le 21e chiffre épuise la source : palier de précision,
        // recalcul, curseur conservé
        let d21 = source.next_digit();
        assert_eq!(source.precision(), 20 + crate::PRECISION_STEP);
        assert_eq!(source.current_index(), 21);

        let mut replay: Vec<u8> = first;
        replay.push(d21);
        assert_eq!(replay, spigot_digits(21));
    }

    #[test]
    fn test_current_index_counts_consumption() {
        let mut source = PiDigits::with_precision(50);
        assert_eq!(source.current_index(), 0);
        for i in 1..=10 {
            source.next_digit();
            assert_eq!(source.current_index(), i);
        }
    }
}
