// SPDX-License-Identifier: AGPL-3.0-only

//! Reference digits of π for validation.
//!
//! Every digit-accuracy check in the validation binary and the integration
//! tests compares against this constant rather than recomputing a baseline
//! at run time, so validation is deterministic and independent of the
//! arithmetic provider under test.
//!
//! Provenance: first 1000 decimal places of π, cross-checked against
//! OEIS A000796 and the MPFR `const_pi` value at 16000 bits. The
//! Feynman point (six consecutive 9s) sits at decimal places 762-767,
//! and place 1000 is 9 — both match the published expansion.

/// The first 1000 decimal places of π (fractional digits only, no "3.").
pub const PI_FRACTIONAL_1000: &str = concat!(
    "14159265358979323846264338327950288419716939937510",
    "58209749445923078164062862089986280348253421170679",
    "82148086513282306647093844609550582231725359408128",
    "48111745028410270193852110555964462294895493038196",
    "44288109756659334461284756482337867831652712019091",
    "45648566923460348610454326648213393607260249141273",
    "72458700660631558817488152092096282925409171536436",
    "78925903600113305305488204665213841469519415116094",
    "33057270365759591953092186117381932611793105118548",
    "07446237996274956735188575272489122793818301194912",
    "98336733624406566430860213949463952247371907021798",
    "60943702770539217176293176752384674818467669405132",
    "00056812714526356082778577134275778960917363717872",
    "14684409012249534301465495853710507922796892589235",
    "42019956112129021960864034418159813629774771309960",
    "51870721134999999837297804995105973173281609631859",
    "50244594553469083026425223082533446850352619311881",
    "71010003137838752886587533208381420617177669147303",
    "59825349042875546873115956286388235378759375195778",
    "18577805321712268066130019278766111959092164201989",
);

/// Number of leading digits on which `observed` agrees with `reference`.
///
/// Compares digit-by-digit from the front; a correct-rounding difference in
/// the last digit of `observed` therefore costs exactly one digit.
#[must_use]
pub fn matching_digits(observed: &str, reference: &str) -> usize {
    observed
        .bytes()
        .zip(reference.bytes())
        .take_while(|(o, r)| o == r)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_has_1000_digits() {
        assert_eq!(PI_FRACTIONAL_1000.len(), 1000);
        assert!(PI_FRACTIONAL_1000.bytes().all(|b| b.is_ascii_digit()));
    }

    #[test]
    fn reference_opens_with_known_digits() {
        assert!(PI_FRACTIONAL_1000.starts_with("14159265358979323846"));
    }

    #[test]
    fn reference_feynman_point() {
        // Decimal places 762-767 are the famous run of six 9s.
        assert_eq!(&PI_FRACTIONAL_1000[761..767], "999999");
    }

    #[test]
    fn matching_digits_counts_common_prefix() {
        assert_eq!(matching_digits("14159", "14159"), 5);
        assert_eq!(matching_digits("14158", "14159"), 4);
        assert_eq!(matching_digits("24159", "14159"), 0);
        assert_eq!(matching_digits("", "14159"), 0);
    }
}
