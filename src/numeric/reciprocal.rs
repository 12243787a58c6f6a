// ============================================================================
// Reciprocal Table
// Precomputed expansions of 1/n for the small sezimal divisors
// ============================================================================

use smallvec::SmallVec;

/// Expansion of `1/divisor` as a fixed run of fractional digits followed by
/// a (possibly empty) run that repeats forever.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reciprocal {
    /// Divisor, as canonical sezimal integer text
    pub divisor: &'static str,
    /// Non-repeating fractional digits
    pub fixed: &'static str,
    /// Repeating fractional digits, empty for terminating expansions
    pub period: &'static str,
}

impl Reciprocal {
    const fn new(divisor: &'static str, fixed: &'static str, period: &'static str) -> Self {
        Self {
            divisor,
            fixed,
            period,
        }
    }

    /// Whether the expansion terminates
    #[inline]
    pub fn is_terminating(&self) -> bool {
        self.period.is_empty()
    }

    /// Fractional digits of `1/divisor`, cut (not rounded) after `limit` digits.
    pub fn expand(&self, limit: usize) -> SmallVec<[u8; 32]> {
        let fixed = self.fixed.bytes().map(|b| b - b'0');
        let period = self.period.bytes().map(|b| b - b'0');
        if self.is_terminating() {
            fixed.take(limit).collect()
        } else {
            fixed.chain(period.cycle()).take(limit).collect()
        }
    }
}

/// Looks up the reciprocal of a canonical sezimal integer string.
pub fn lookup(divisor: &str) -> Option<&'static Reciprocal> {
    RECIPROCALS.iter().find(|r| r.divisor == divisor)
}

/// `1/n` for every divisor from 2 to 244₆ (one hundred)
pub static RECIPROCALS: [Reciprocal; 99] = [
    Reciprocal::new("2", "3", ""),
    Reciprocal::new("3", "2", ""),
    Reciprocal::new("4", "13", ""),
    Reciprocal::new("5", "", "1"),
    Reciprocal::new("10", "1", ""),
    Reciprocal::new("11", "", "05"),
    Reciprocal::new("12", "043", ""),
    Reciprocal::new("13", "04", ""),
    Reciprocal::new("14", "0", "3"),
    Reciprocal::new("15", "", "0313452421"),
    Reciprocal::new("20", "03", ""),
    Reciprocal::new("21", "", "024340531215"),
    Reciprocal::new("22", "0", "23"),
    Reciprocal::new("23", "0", "2"),
    Reciprocal::new("24", "0213", ""),
    Reciprocal::new("25", "", "0204122453514331"),
    Reciprocal::new("30", "02", ""),
    Reciprocal::new("31", "", "015211325"),
    Reciprocal::new("32", "01", "4"),
    Reciprocal::new("33", "0", "14"),
    Reciprocal::new("34", "0", "1345242103"),
    Reciprocal::new("35", "", "01322030441"),
    Reciprocal::new("40", "013", ""),
    Reciprocal::new("41", "", "01235"),
    Reciprocal::new("42", "0", "121502434053"),
    Reciprocal::new("43", "012", ""),
    Reciprocal::new("44", "01", "14"),
    Reciprocal::new("45", "", "01124045443151"),
    Reciprocal::new("50", "0", "1"),
    Reciprocal::new("51", "", "010545"),
    Reciprocal::new("52", "01043", ""),
    Reciprocal::new("53", "0", "1031345242"),
    Reciprocal::new("54", "0", "1020412245351433"),
    Reciprocal::new("55", "", "01"),
    Reciprocal::new("100", "01", ""),
    Reciprocal::new("101", "", "0055"),
    Reciprocal::new("102", "0", "054034423"),
    Reciprocal::new("103", "0", "053121502434"),
    Reciprocal::new("104", "005", "2"),
    Reciprocal::new("105", "", "0051335412440330234455042201431152253211"),
    Reciprocal::new("110", "0", "05"),
    Reciprocal::new("111", "", "005"),
    Reciprocal::new("112", "00", "4524210313"),
    Reciprocal::new("113", "00", "4"),
    Reciprocal::new("114", "0", "04410132203"),
    Reciprocal::new("115", "", "00433240302144201310521"),
    Reciprocal::new("120", "0043", ""),
    Reciprocal::new("121", "", "00422405513315"),
    Reciprocal::new("122", "0", "04153"),
    Reciprocal::new("123", "0", "0412245351433102"),
    Reciprocal::new("124", "00", "405312150243"),
    Reciprocal::new("125", "", "00402414511245515314104431"),
    Reciprocal::new("130", "004", ""),
    Reciprocal::new("131", "", "0035321425"),
    Reciprocal::new("132", "003", "50"),
    Reciprocal::new("133", "0", "034423054"),
    Reciprocal::new("134", "0", "03420225213533"),
    Reciprocal::new("135", "", "0033544402235104134324250301455220111533204514212313052541"),
    Reciprocal::new("140", "00", "3"),
    Reciprocal::new("141", "", "003312504044154453014342320220552243051511401102541213235335"),
    Reciprocal::new("142", "0", "032523"),
    Reciprocal::new("143", "00", "32"),
    Reciprocal::new("144", "003213", ""),
    Reciprocal::new("145", "", "003153441251"),
    Reciprocal::new("150", "0", "0313452421"),
    Reciprocal::new("151", "", "003120205212332542154531514113045"),
    Reciprocal::new("152", "00", "3102041224535143"),
    Reciprocal::new("153", "0", "03044101322"),
    Reciprocal::new("154", "0", "03"),
    Reciprocal::new("155", "", "00301304321405023113344522412040201"),
    Reciprocal::new("200", "003", ""),
    Reciprocal::new("201", "", "002543042344035400553012513211520155"),
    Reciprocal::new("202", "0", "0253"),
    Reciprocal::new("203", "0", "02514"),
    Reciprocal::new("204", "00", "250152113"),
    Reciprocal::new("205", "", "0024455311"),
    Reciprocal::new("210", "0", "024340531215"),
    Reciprocal::new("211", "", "002422325434441304033512354102140052450553133230121114251522043201453415503105"),
    Reciprocal::new("212", "0024", "1"),
    Reciprocal::new("213", "0024", ""),
    Reciprocal::new("214", "0", "0234455042201431152253211005133541244033"),
    Reciprocal::new("215", "", "0023340420051121240142242520324525441053455322151355044343154133130352310301145021"),
    Reciprocal::new("220", "00", "23"),
    Reciprocal::new("221", "", "0023125210435415"),
    Reciprocal::new("222", "0", "023"),
    Reciprocal::new("223", "0", "02252135330342"),
    Reciprocal::new("224", "002", "2421031345"),
    Reciprocal::new("225", "", "0022321203122544415154214303350200450424102455332343524330111404013412522053551051314531"),
    Reciprocal::new("230", "00", "2"),
    Reciprocal::new("231", "", "002212411525"),
    Reciprocal::new("232", "00", "22030441013"),
    Reciprocal::new("233", "0", "021534"),
    Reciprocal::new("234", "0", "02144201310521004332403"),
    Reciprocal::new("235", "", "002135041"),
    Reciprocal::new("240", "00213", ""),
    Reciprocal::new("241", "", "002120553435"),
    Reciprocal::new("242", "0", "02112025344353"),
    Reciprocal::new("243", "00", "2103134524"),
    Reciprocal::new("244", "00", "20543"),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn digits(text: &str) -> Vec<u8> {
        text.bytes().map(|b| b - b'0').collect()
    }

    #[test]
    fn test_lookup_terminating() {
        let half = lookup("2").unwrap();
        assert!(half.is_terminating());
        assert_eq!(half.expand(40).as_slice(), &[3]);

        let eighth = lookup("12").unwrap();
        assert_eq!(eighth.expand(40).as_slice(), digits("043").as_slice());
    }

    #[test]
    fn test_lookup_periodic() {
        let fifth = lookup("5").unwrap();
        assert!(!fifth.is_terminating());
        assert_eq!(fifth.expand(6).as_slice(), &[1, 1, 1, 1, 1, 1]);

        // 1/14₆ (one tenth) = 0.0333…
        let tenth = lookup("14").unwrap();
        assert_eq!(tenth.expand(5).as_slice(), &[0, 3, 3, 3, 3]);

        // 1/11₆ (one seventh) = 0.050505…
        let seventh = lookup("11").unwrap();
        assert_eq!(seventh.expand(7).as_slice(), &[0, 5, 0, 5, 0, 5, 0]);
    }

    #[test]
    fn test_expand_cuts_fixed_part() {
        let eighth = lookup("12").unwrap();
        assert_eq!(eighth.expand(2).as_slice(), &[0, 4]);
    }

    #[test]
    fn test_lookup_miss() {
        assert!(lookup("1").is_none());
        assert!(lookup("245").is_none());
        assert!(lookup("-2").is_none());
        assert!(lookup("2.0").is_none());
    }

    #[test]
    fn test_table_is_well_formed() {
        for entry in RECIPROCALS.iter() {
            assert!(entry.divisor.bytes().all(|b| (b'0'..=b'5').contains(&b)));
            assert!(entry.fixed.bytes().all(|b| (b'0'..=b'5').contains(&b)));
            assert!(entry.period.bytes().all(|b| (b'0'..=b'5').contains(&b)));
            assert!(!entry.fixed.is_empty() || !entry.period.is_empty());
        }
    }
}
