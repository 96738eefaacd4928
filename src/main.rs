//! stalk: look up the person behind an email address

use anyhow::Result;

fn main() -> Result<()> {
    stalk::cli::run()
}
