// ============================================================================
// Mathematical Constants
// Well-known irrational values as sezimal digit literals
// ============================================================================
//
// The literals carry several hundred fractional digits, far beyond any
// practical working precision. The accessor functions round them to the
// context's maximum precision.

use super::config::{self, PrecisionContext};
use super::sezimal::Sezimal;
use crate::engine::{self, Magnitude, Sign};

/// π, half a turn
pub const PI_DIGITS: &str = "3.0503_3005_1415_1241_0523_4414_0531_2532_1102_3012_\
    1444_2004_1152_5255_3314_2033_3131_1355_3513_1233_\
    4553_3410_0151_5434_4401_2343_5445_2030_0450_0242_\
    2343_1402_5131_1452_1100_2025_1031_0105_0341_0355_\
    1355_3305_0550_3255_3300_3214_4152_3154_2431_4050_\
    0010_1130_5413_5235_5521_5513_3504_3133_4522_2145_\
    3052_0215_1005_1415_4221_2553_2250_2421_4010_5035_\
    5555_5042";

/// τ = 2π, a full turn
pub const TAU_DIGITS: &str = "10.1411_0014_3234_2522_1451_3232_1502_5504_2205_0024_\
    3332_4012_2345_4555_1032_4111_0302_3155_1430_2511_\
    3551_1220_0343_5313_3202_5131_5334_4100_1340_0524_\
    5130_3205_4302_3344_2200_4054_2102_0214_1122_1154_\
    3155_1014_1541_0555_1001_0433_2345_0352_5303_2140_\
    0020_2301_5231_4515_5443_5431_1413_0311_3444_4335_\
    0144_0434_2014_3235_2442_5550_4540_5243_2021_4115_\
    5555_4124";

/// Euler's number
pub const E_DIGITS: &str = "2.4150_5205_3524_2431_2312_5404_3523_5440_4354_2350_\
    3244_4010_2144_1200_0353_0121_5235_4401_3514_2154_\
    4003_5025_1432_5453_3304_3541_5042_0122_4105_3505_\
    1215_0500_2543_1154_3514_0342_2503_5104_4132_5040_\
    0223_1153_2151_2444_3103_5453_5323_2131_3544_4522_\
    4542_4421_0122_0301_3320_0040_5033_5053_1420_1023_\
    1440_3425_5530_3003_5334_2032_1223_1105_2225_0245_\
    4415_4045";

/// ln 2
pub const LN_2_DIGITS: &str = "0.4054_1525_0322_5202_5043_3345_0431_2245_5323_3130_\
    1133_1331_1211_0102_5243_4110_4021_2401_2112_2132_\
    1300_0043_2344_1110_0434_4412_1313_2342_3053_1412_\
    3534_2231_3224_5220_0315_1341_0005_0422_0103_4235_\
    3332_5430_3023_3404_4555_1520_5240_2205_2202_5335_\
    3100_3122_2324_1220_0345_0312_2352_4412_2150_4343_\
    1353_3025_0114_4524_2442_0225_5034_4310_4504_5113_\
    5305_5202";

/// ln 3
pub const LN_3_DIGITS: &str = "1.0331_4450_4400_0302_3031_4515_3444_2410_0405_1125_\
    3331_2424_3525_5311_2403_5500_5032_4330_1030_2552_\
    4334_1344_2214_4523_3215_1135_3555_4151_5143_4053_\
    0303_5134_4410_2412_4222_2232_4430_1205_4044_2301_\
    5404_5041_2302_0053_1011_5224_2100_4333_4451_4421_\
    5332_0013_5010_2505_4330_1552_0345_1142_3152_4242_\
    5111_3232_2214_3330_1114_5012_4342_5101_3431_3142_\
    4050_2302";

/// ln 4
pub const LN_4_DIGITS: &str = "1.2152_3454_1045_4405_4131_1134_1302_4535_5051_0300_\
    2310_3102_2422_0205_4531_2221_2042_5202_4224_4304_\
    3000_0130_5132_2220_1313_3224_3030_5125_0150_3225_\
    1512_4503_0453_4440_1034_3122_0014_1244_0211_2515_\
    1105_5301_0051_1213_3554_3441_4520_4414_4405_5115_\
    0201_0244_5052_2440_1134_1024_5145_3224_4341_3130_\
    3151_0054_0233_3452_5324_0455_4113_3021_3413_4231_\
    5015_4403";

/// ln 5
pub const LN_5_DIGITS: &str = "1.3353_4553_4002_4015_0504_5535_3101_2042_3150_1331_\
    5324_0225_0430_4002_1245_4520_3205_5532_5204_5424_\
    1030_4310_1225_4314_1114_3311_2352_5115_3515_0513_\
    2435_5011_4302_1153_5225_4250_1501_1031_3425_5302_\
    0044_2535_1433_5522_5024_2323_4545_3544_4234_5344_\
    3205_3110_3105_4211_1433_3240_0043_4020_5023_3255_\
    3224_5243_0032_4250_1304_3244_0121_4525_1254_2223_\
    1444_3320";

/// ln 10₆ (ln six), the denominator of `log`
pub const LN_10_DIGITS: &str = "1.4430_0415_5122_5505_2115_2304_4315_5100_0132_4255_\
    4504_4155_5140_5414_2051_4011_3054_1131_3142_5125_\
    0034_1431_5003_0033_4053_5551_5313_0534_2240_5505_\
    4242_1410_2035_2032_4541_4013_4435_2031_4152_0541_\
    3141_4511_5325_3502_0011_1145_1341_0543_1054_4201_\
    2432_3140_1334_4125_5115_2304_3141_5554_5343_3030_\
    0505_0301_2333_2254_4000_5242_3421_3412_2340_2300_\
    3400_1504";

/// √2
pub const SQRT_2_DIGITS: &str = "1.2252_4531_4205_5233_2143_2232_4304_4240_3335_4344_\
    1200_2245_3450_1254_3502_5233_5535_2352_0142_4243_\
    2155_3142_4102_0123_0153_4312_2054_5234_5540_2132_\
    0243_1222_4050_2030_1155_3034_4424_4444_2551_3212_\
    4405_3115_4552_5500_3405_5030_5432_3342_5235_2112_\
    4330_4231_4335_3320_4432_4421_1133_0023_4042_3114_\
    5325_2203_5433_4421_2141_1414_1430_4202_0323_4354_\
    4201_5023";

/// φ = (1 + √5) / 2
pub const GOLDEN_RATIO_DIGITS: &str = "1.3412_5455_4353_4314_5134_2235_1401_5012_0045_2501_\
    2404_4114_0144_2310_5520_3304_4055_3030_0224_3503_\
    4235_1230_0003_4523_4545_1235_4334_5300_5431_1034_\
    1251_4505_1212_0330_3254_3315_2323_3334_4541_5142_\
    5111_2011_1042_2122_4010_4434_1425_0351_0354_4355_\
    1303_3151_1031_1154_0544_0400_1112_5515_4411_3053_\
    5223_0010_2513_4315_1443_2140_1303_0413_1013_1011_\
    5033_0224";

/// Builds a positive constant from one of the digit literals above, rounded
/// to `ctx.max_precision` fractional digits.
///
/// The literals hold only the digits `0-5`, one point and `_` separators.
pub fn constant_with(digits: &'static str, ctx: &PrecisionContext) -> Sezimal {
    let (integer, fraction) = digits.split_once('.').unwrap_or((digits, ""));
    let magnitude = Magnitude::new(digit_values(integer), digit_values(fraction));
    Sezimal::from_parts(Sign::Positive, engine::round(&magnitude, ctx.max_precision))
}

fn digit_values(run: &str) -> impl Iterator<Item = u8> + '_ {
    run.bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
}

pub fn pi() -> Sezimal {
    constant_with(PI_DIGITS, config::current())
}

pub fn tau() -> Sezimal {
    constant_with(TAU_DIGITS, config::current())
}

pub fn e() -> Sezimal {
    constant_with(E_DIGITS, config::current())
}

pub fn ln_2() -> Sezimal {
    constant_with(LN_2_DIGITS, config::current())
}

pub fn ln_3() -> Sezimal {
    constant_with(LN_3_DIGITS, config::current())
}

pub fn sqrt_2() -> Sezimal {
    constant_with(SQRT_2_DIGITS, config::current())
}

pub fn golden_ratio() -> Sezimal {
    constant_with(GOLDEN_RATIO_DIGITS, config::current())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::BigDecimal;
    use std::str::FromStr;

    fn ctx(max_precision: usize) -> PrecisionContext {
        PrecisionContext::new().with_max_precision(max_precision)
    }

    fn assert_close(value: &Sezimal, expected: &str) {
        let expected = BigDecimal::from_str(expected).unwrap();
        let difference = (value.decimal() - &expected).abs();
        assert!(
            difference < BigDecimal::from_str("0.00000000000001").unwrap(),
            "{value} is {difference} away from {expected}"
        );
    }

    #[test]
    fn test_constants_round_to_context() {
        // The 21st digit of π is 4, so the 20th rounds up
        assert_eq!(
            constant_with(PI_DIGITS, &ctx(20)).to_string(),
            "3.05033005141512410524"
        );
        assert_eq!(constant_with(PI_DIGITS, &ctx(4)).to_string(), "3.0504");
        assert_eq!(constant_with(E_DIGITS, &ctx(1)).to_string(), "2.4");
        assert_eq!(constant_with(TAU_DIGITS, &ctx(3)).to_string(), "10.141");
    }

    #[test]
    fn test_constants_match_decimal_values() {
        let ctx = ctx(20);
        assert_close(&constant_with(PI_DIGITS, &ctx), "3.14159265358979");
        assert_close(&constant_with(TAU_DIGITS, &ctx), "6.28318530717959");
        assert_close(&constant_with(E_DIGITS, &ctx), "2.71828182845905");
        assert_close(&constant_with(LN_2_DIGITS, &ctx), "0.693147180559945");
        assert_close(&constant_with(LN_3_DIGITS, &ctx), "1.09861228866811");
        assert_close(&constant_with(LN_10_DIGITS, &ctx), "1.79175946922806");
        assert_close(&constant_with(SQRT_2_DIGITS, &ctx), "1.41421356237310");
        assert_close(&constant_with(GOLDEN_RATIO_DIGITS, &ctx), "1.61803398874989");
    }

    #[test]
    fn test_logarithm_identities() {
        let ctx = ctx(20);
        let ln_2 = constant_with(LN_2_DIGITS, &ctx);
        let ln_3 = constant_with(LN_3_DIGITS, &ctx);
        let ln_4 = constant_with(LN_4_DIGITS, &ctx);
        let ln_6 = constant_with(LN_10_DIGITS, &ctx);

        let unit = Sezimal::from_parts(Sign::Positive, Magnitude::unit(20));
        assert!((&(&ln_2 + &ln_3) - &ln_6).abs() <= unit);
        assert!((&(&ln_2 + &ln_2) - &ln_4).abs() <= unit);
    }

    #[test]
    fn test_default_accessors() {
        assert!(pi() > Sezimal::from(3i64));
        assert!(tau() > pi());
        assert!(sqrt_2() < golden_ratio());
        assert!(ln_2() < ln_3());
        assert!(e() < pi());
    }
}
