use chrono_tz::Tz;
use datefmt::{validate, DateFormatter};

fn main() -> anyhow::Result<()> {
    // Format the first CLI argument, or a known sample datetime
    let input = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "2003-06-03 09:39:21".to_string());
    validate(&input)?;

    let utc = DateFormatter::default();
    let pacific = DateFormatter::new(Tz::America__Los_Angeles);

    println!("input:            {}", input);
    println!("integer key:      {}", utc.integer(&input));
    println!("us english:       {}", utc.usenglish(&input));
    println!("us english long:  {}", utc.usenglish_long_ampm(&input));
    println!("cms publish date: {}", utc.cms_publishdate(&input));
    println!("rss (UTC):        {}", utc.rss(&input));
    println!("rss (Pacific):    {}", pacific.rss(&input));
    println!("w3c (UTC):        {}", utc.w3c(&input));
    println!("w3c (Pacific):    {}", pacific.w3c(&input));

    Ok(())
}
