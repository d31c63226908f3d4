//! Screening URLs against a small blocklist held in a Bloom filter.
//!
//! Run with `RUST_LOG=debug cargo run --example urls` to see the filter's parameters logged.
use bloomset::BloomFilter;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), bloomset::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut blocklist = BloomFilter::with_rate(200, 0.0001)?;
    println!("{}", blocklist.details());

    blocklist.insert("http://fraud.com");
    blocklist.insert("http://insecureweb.com");
    blocklist.insert("http://webhack.com");

    for url in ["https://www.maniartech.com", "http://insecureweb.com"] {
        println!("Is {} malicious? {}", url, blocklist.contains(url));
    }
    Ok(())
}
