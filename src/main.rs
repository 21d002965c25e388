use clap::{Parser, Subcommand};
use simple_folio::clock::SystemClock;
use simple_folio::{config, content, generate, logging, output};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "simple-folio")]
#[command(about = "Static site generator for one-page portfolios")]
#[command(long_about = "\
Static site generator for one-page portfolios

One TOML file declares the page. The build writes a single index.html with
inline CSS and copies the assets it links to.

Content structure:

  content/
  ├── portfolio.toml     # Identity, socials, documents, projects, websites, player
  ├── config.toml        # Colors, motion, layout (optional, sparse)
  └── assets/            # Copied to dist/assets/ → link as /assets/<file>
      ├── cv.pdf
      └── logo.png

Page sections, in order:
  About Me       [[documents]]  circular links (title, url, subtitle)
  Open Source    [[projects]]   cards (title, url, description, logo?)
  Website        [[websites]]   cards (title, url, description, logo?)
  Hobby • Music  [media]        embedded player (embed_src, artist_url)

Run 'simple-folio gen-content' for a documented portfolio.toml and
'simple-folio gen-config' for a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Diagnostic log level (trace|debug|info|warn|error|off); RUST_LOG overrides
    #[arg(long, default_value = logging::DEFAULT_LEVEL, global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the page and copy assets into the output directory
    Build,
    /// Validate content without building
    Check {
        /// Print the parsed content as JSON instead of the inventory
        #[arg(long)]
        json: bool,
    },
    /// Print a stock config.toml with all options documented
    GenConfig,
    /// Print a sample portfolio.toml
    GenContent,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let _logger = logging::init_logging(&cli.log_level)?;

    match cli.command {
        Command::Build => {
            println!("==> Building {}", cli.source.display());
            let report = generate::generate(&cli.source, &cli.output, &SystemClock)?;
            output::print_build_output(&report);
            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check { json } => {
            let site = generate::load_site(&cli.source)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&site.portfolio)?);
            } else {
                println!("==> Checking {}", cli.source.display());
                output::print_check_output(&site);
                println!("==> Content is valid");
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
        Command::GenContent => {
            print!("{}", content::stock_portfolio_toml());
        }
    }

    Ok(())
}
