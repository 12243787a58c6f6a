// ============================================================================
// Basic Usage Example
// ============================================================================

use rust_decimal::Decimal;
use sezimal::prelude::*;

fn main() -> Result<(), NumericError> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    install(PrecisionContext::new().with_max_precision(24))?;
    println!("=== Sezimal Example (max precision {}) ===\n", current().max_precision);

    // Construction from every input form
    println!("Construction:");
    let inputs = [
        SezimalInput::from("-14.3"),
        SezimalInput::from(Decimal::new(-105, 1)),
        SezimalInput::dozenal("-A.6"),
        SezimalInput::niftimal("-A.I"),
        SezimalInput::ratio(-21i64, 2i64),
    ];
    for input in inputs {
        let label = format!("{input:?}");
        println!("  {label:<40} -> {}", Sezimal::new(input)?);
    }

    // Arithmetic
    println!("\nArithmetic:");
    let a = Sezimal::new("55")?;
    let b = Sezimal::new("1")?;
    println!("  {a} + {b} = {}", &a + &b);
    println!("  {a} - {b} = {}", &a - &b);
    println!("  {a} × 1.3 = {}", &a * &Sezimal::new("1.3")?);
    println!("  1 / 5 = {}", Sezimal::one().checked_div(&Sezimal::from(5i64))?);
    let (quotient, remainder) = Sezimal::new("-11")?.checked_divmod(&Sezimal::new("2")?)?;
    println!("  -11 divmod 2 = ({quotient}, {remainder})");

    // Exact rationals
    println!("\nRationals:");
    let third: SezimalFraction = "1/3".parse()?;
    let product = &third * &SezimalInteger::from(3i64);
    println!("  {third} ≈ {}", third.approx());
    println!("  {third} × 3 = {product} = {}", product.approx());
    println!("  {} ^ -2 = {}", third, third.powi(-2)?);

    // Integers
    println!("\nIntegers:");
    let ten = SezimalInteger::new("14")?;
    println!("  14! = {}", ten.factorial()?);
    println!("  gcd(24, 40) = {}", SezimalInteger::new("24")?.gcd(&SezimalInteger::new("40")?));
    println!("  14 as native index = {}", ten.to_index()?);

    // Transcendental functions through a logging backend
    println!("\nTranscendental:");
    let backend = LoggingBackend::new(BigDecimalBackend);
    let ctx = current();
    let two = Sezimal::from(2i64);
    println!("  ln 2   = {}", two.ln_with(&backend, ctx)?);
    println!("  ln 2 (constant) = {}", constants::ln_2());
    println!("  √2     = {}", two.sqrt_with(&backend, ctx)?);
    println!("  e      = {}", Sezimal::one().exp_with(&backend, ctx)?);
    println!("  π      = {}", constants::pi());
    println!("  log14(244) = {}", Sezimal::new("244")?.log14()?);

    // Bridges
    println!("\nBridges:");
    let value = Sezimal::new("4344.13")?;
    println!("  {value} = {} (decimal)", value.decimal());
    println!("  {value} = {} (rust_decimal)", value.to_rust_decimal()?);
    println!("  {value} = {} (dozenal)", value.to_dozenal());
    println!("  {value} = {} (niftimal)", value.to_niftimal());

    Ok(())
}
