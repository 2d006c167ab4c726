use clap::Parser;
use std::path::PathBuf;

#[must_use]
pub fn args_checks() -> Args {
    Args::parse()
}

#[derive(Parser, Clone, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Address to bind the HTTP server on
    #[arg(long, value_name = "ADDR", default_value = "0.0.0.0")]
    pub bind: String,

    /// Port to listen on; also the port of the default base-URL fallback
    #[arg(short, long, value_name = "PORT", default_value_t = 3001)]
    pub port: u16,

    /// Per-domain SEO catalog (JSON)
    #[arg(long, value_name = "FILE", default_value = "seo.json")]
    pub seo_catalog: PathBuf,

    /// Directory of static assets served at the site root
    #[arg(long, value_name = "DIR", default_value = "./static")]
    pub static_dir: String,
}
