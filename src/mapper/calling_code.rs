//! Country calling codes by ISO 3166 alpha-2 code.
use fnv::FnvHashMap;

use crate::fnvhashmap;

lazy_static! {
    static ref CALLING_CODES: FnvHashMap<&'static str, &'static str> =
        fnvhashmap! {
            "BE" => "32",
            "BF" => "226",
            "BJ" => "229",
            "CA" => "1",
            "CD" => "243",
            "CF" => "236",
            "CG" => "242",
            "CH" => "41",
            "CI" => "225",
            "CM" => "237",
            "DZ" => "213",
            "FR" => "33",
            "GA" => "241",
            "GH" => "233",
            "GN" => "224",
            "MA" => "212",
            "MG" => "261",
            "ML" => "223",
            "MR" => "222",
            "NE" => "227",
            "NG" => "234",
            "SN" => "221",
            "TD" => "235",
            "TG" => "228",
            "TN" => "216",
            "US" => "1"
        };
}

/// Returns the calling code (without `+`) of the country.
pub fn resolve(country: &str) -> Option<&'static str> {
    CALLING_CODES
        .get(country.trim().to_ascii_uppercase().as_str())
        .copied()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_resolve() {
        assert_eq!(Some("225"), resolve("CI"));
        assert_eq!(Some("221"), resolve("sn"));
        assert_eq!(Some("33"), resolve(" FR "));
    }

    #[test]
    fn test_resolve_unknown() {
        assert_eq!(None, resolve("XX"));
        assert_eq!(None, resolve(""));
        assert_eq!(None, resolve("Côte d'Ivoire"));
    }
}
