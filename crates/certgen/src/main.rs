use cert_core::form::{
    BRANCH_OPTIONS, DEFAULT_COURSE_FONT_SIZE, DEFAULT_NAME_FONT_SIZE, YEAR_OPTIONS,
};
use cert_core::{CertificateForm, FieldEntry, FontChoice, FontTable};
use certgen::{ensure_template, form_error_message, generate_certificate, Config};
use pdf_export::ImageEncoding;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

/// Exit code for form problems the user can fix and resubmit
const EXIT_FORM: u8 = 2;

#[derive(Debug, Parser)]
#[command(name = "certgen", version, about = "Generate a certificate PDF")]
struct Args {
    /// Recipient name
    #[arg(long, default_value = "")]
    name: String,

    /// Branch (one of the listed branches unless --manual-branch)
    #[arg(long, default_value = BRANCH_OPTIONS[0])]
    branch: String,

    /// Accept any branch text
    #[arg(long)]
    manual_branch: bool,

    /// Year such as 3rd (one of the listed years unless --manual-year)
    #[arg(long, default_value = YEAR_OPTIONS[0])]
    year: String,

    /// Accept any year text
    #[arg(long)]
    manual_year: bool,

    /// Font family for the name (defaults to the first configured family)
    #[arg(long)]
    name_font: Option<String>,

    /// Name font size in pixels
    #[arg(long, default_value_t = DEFAULT_NAME_FONT_SIZE)]
    name_size: u32,

    /// Font family for the branch/year line
    #[arg(long)]
    course_font: Option<String>,

    /// Branch/year font size in pixels
    #[arg(long, default_value_t = DEFAULT_COURSE_FONT_SIZE)]
    course_size: u32,

    /// Configuration file
    #[arg(long, default_value = "certgen.json")]
    config: PathBuf,

    /// Embed the certificate as JPEG at this quality (1-100) instead of lossless
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=100))]
    jpeg_quality: Option<u8>,

    /// Directory for the generated PDF
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Print the available fonts, branches and years, then exit
    #[arg(long)]
    list: bool,
}

impl Args {
    fn encoding(&self) -> ImageEncoding {
        match self.jpeg_quality {
            Some(quality) => ImageEncoding::Jpeg { quality },
            None => ImageEncoding::Flate,
        }
    }

    fn to_form(&self, fonts: &FontTable) -> CertificateForm {
        let default_family = fonts.families().first().copied().unwrap_or_default();
        let family = |choice: &Option<String>| {
            choice
                .clone()
                .unwrap_or_else(|| default_family.to_string())
        };

        CertificateForm {
            name: self.name.clone(),
            branch: entry(&self.branch, self.manual_branch),
            year: entry(&self.year, self.manual_year),
            name_font: FontChoice {
                family: family(&self.name_font),
                size: self.name_size,
            },
            course_font: FontChoice {
                family: family(&self.course_font),
                size: self.course_size,
            },
        }
    }
}

fn entry(value: &str, manual: bool) -> FieldEntry {
    if manual {
        FieldEntry::Manual(value.to_string())
    } else {
        FieldEntry::Select(value.to_string())
    }
}

fn print_options(fonts: &FontTable) {
    println!("Fonts:    {}", fonts.families().join(", "));
    println!("Branches: {}", BRANCH_OPTIONS.join(", "));
    println!("Years:    {}", YEAR_OPTIONS.join(", "));
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let config = match Config::load(&args.config) {
        Ok(config) => config,
        Err(e) => {
            log::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let fonts = match config.font_table() {
        Ok(fonts) => fonts,
        Err(e) => {
            log::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    if args.list {
        print_options(&fonts);
        return ExitCode::SUCCESS;
    }

    if fonts.is_empty() {
        log::error!(
            "no fonts configured; add entries to \"fonts\" in {}",
            args.config.display()
        );
        return ExitCode::FAILURE;
    }

    let template = match ensure_template(&config.template) {
        Ok(template) => template,
        Err(e) => {
            eprintln!("Failed to load certificate template! Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let request = match args.to_form(&fonts).validate() {
        Ok(request) => request,
        Err(e) if e.is_form_error() => {
            log::warn!("{e}");
            eprintln!("{}", form_error_message(&e));
            return ExitCode::from(EXIT_FORM);
        }
        Err(e) => {
            log::error!("{}", form_error_message(&e));
            return ExitCode::FAILURE;
        }
    };

    match generate_certificate(
        &fonts,
        &template,
        &request,
        args.encoding(),
        &args.out_dir,
    ) {
        Ok(path) => {
            println!("Your certificate is ready: {}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
