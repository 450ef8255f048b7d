use futures::executor::block_on;
use serde::Serialize;
use std::io::{Read, Write};
use std::str::FromStr;
use vehicle_form::render::raster::{self, RasterError, RasterOptions};
use vehicle_form::render::{HeadlessError, RenderResponse, ResponseConfig, VehicleRenderer};
use vehicle_form::{BodyKind, Personality, Seed, VehicleDescriptor};

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Json(serde_json::Error),
    Headless(HeadlessError),
    Raster(RasterError),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
            CliError::Headless(err) => write!(f, "{err}"),
            CliError::Raster(err) => write!(f, "{err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<HeadlessError> for CliError {
    fn from(value: HeadlessError) -> Self {
        Self::Headless(value)
    }
}

impl From<RasterError> for CliError {
    fn from(value: RasterError) -> Self {
        Self::Raster(value)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Command {
    #[default]
    Render,
    Respond,
    Classify,
    Seed,
    Inspect,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum RenderFormat {
    #[default]
    Svg,
    Png,
    Jpeg,
    Pdf,
}

impl RenderFormat {
    fn extension(self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Png => "png",
            Self::Jpeg => "jpg",
            Self::Pdf => "pdf",
        }
    }
}

impl FromStr for RenderFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "svg" => Ok(Self::Svg),
            "png" => Ok(Self::Png),
            "jpg" | "jpeg" => Ok(Self::Jpeg),
            "pdf" => Ok(Self::Pdf),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    input: Option<String>,
    query: Option<String>,
    make: Option<String>,
    model: Option<String>,
    year: Option<String>,
    body_class: Option<String>,
    vehicle_type: Option<String>,
    render_format: RenderFormat,
    render_scale: f32,
    background: Option<String>,
    force_fallback: bool,
    config: Option<String>,
    out: Option<String>,
    pretty: bool,
}

#[derive(Serialize)]
struct InspectOut<'a> {
    label: &'a str,
    kind: BodyKind,
    seed: Seed,
    personality: Personality,
}

fn usage() -> &'static str {
    "vehicle-form-cli\n\
\n\
USAGE:\n\
  vehicle-form-cli [render] [DESCRIPTOR] [--format svg|png|jpg|pdf] [--scale <n>] [--background <css-color>] [--fallback] [--out <path>] [<descriptor.json>|-]\n\
  vehicle-form-cli respond [DESCRIPTOR] [--config <response.json>]\n\
  vehicle-form-cli classify [DESCRIPTOR] [<descriptor.json>|-]\n\
  vehicle-form-cli seed [DESCRIPTOR] [<descriptor.json>|-]\n\
  vehicle-form-cli inspect [--pretty] [DESCRIPTOR] [<descriptor.json>|-]\n\
\n\
DESCRIPTOR:\n\
  --make <s> --model <s> --year <s> --body-class <s> --vehicle-type <s> --query <urlencoded>\n\
\n\
NOTES:\n\
  - A <descriptor.json> path (or '-' for stdin) is read as {make, model, year, bodyClass, vehicleType}.\n\
  - --query and field flags apply on top of the JSON descriptor; field flags win.\n\
  - render prints SVG to stdout by default; use --out to write a file.\n\
  - PNG/JPG/PDF output defaults to writing next to the descriptor file (or ./out.<ext>).\n\
  - respond prints an HTTP-style status line, headers and body.\n\
  - Set RUST_LOG=debug to see classification and fallback diagnostics on stderr.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args {
        command: Command::Render,
        render_format: RenderFormat::Svg,
        render_scale: 1.0,
        ..Default::default()
    };

    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        let mut value = || it.next().cloned().ok_or(CliError::Usage(usage()));
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "render" => args.command = Command::Render,
            "respond" => args.command = Command::Respond,
            "classify" => args.command = Command::Classify,
            "seed" => args.command = Command::Seed,
            "inspect" => args.command = Command::Inspect,
            "--pretty" => args.pretty = true,
            "--fallback" => args.force_fallback = true,
            "--make" => args.make = Some(value()?),
            "--model" => args.model = Some(value()?),
            "--year" => args.year = Some(value()?),
            "--body-class" => args.body_class = Some(value()?),
            "--vehicle-type" => args.vehicle_type = Some(value()?),
            "--query" => args.query = Some(value()?),
            "--config" => args.config = Some(value()?),
            "--out" => args.out = Some(value()?),
            "--format" => {
                args.render_format = value()?
                    .parse::<RenderFormat>()
                    .map_err(|_| CliError::Usage(usage()))?;
            }
            "--scale" => {
                args.render_scale = value()?
                    .parse::<f32>()
                    .map_err(|_| CliError::Usage(usage()))?;
                if !(args.render_scale.is_finite() && args.render_scale > 0.0) {
                    return Err(CliError::Usage(usage()));
                }
            }
            "--background" => {
                let bg = value()?;
                if !bg.trim().is_empty() {
                    args.background = Some(bg.trim().to_string());
                }
            }
            "-" => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some("-".to_string());
            }
            other if other.starts_with('-') => return Err(CliError::Usage(usage())),
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    Ok(args)
}

fn read_input(input: &str) -> Result<String, CliError> {
    if input == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        Ok(std::fs::read_to_string(input)?)
    }
}

fn build_descriptor(args: &Args) -> Result<VehicleDescriptor, CliError> {
    let mut descriptor = match args.input.as_deref() {
        Some(input) => serde_json::from_str::<VehicleDescriptor>(&read_input(input)?)?.normalized(),
        None => VehicleDescriptor::default(),
    };

    if let Some(query) = args.query.as_deref() {
        let parsed = VehicleDescriptor::from_query(query);
        for (slot, value) in [
            (&mut descriptor.make, parsed.make),
            (&mut descriptor.model, parsed.model),
            (&mut descriptor.year, parsed.year),
            (&mut descriptor.body_class, parsed.body_class),
            (&mut descriptor.vehicle_type, parsed.vehicle_type),
        ] {
            if !value.is_empty() {
                *slot = value;
            }
        }
    }

    if let Some(v) = &args.make {
        descriptor = descriptor.with_make(v);
    }
    if let Some(v) = &args.model {
        descriptor = descriptor.with_model(v);
    }
    if let Some(v) = &args.year {
        descriptor = descriptor.with_year(v);
    }
    if let Some(v) = &args.body_class {
        descriptor = descriptor.with_body_class(v);
    }
    if let Some(v) = &args.vehicle_type {
        descriptor = descriptor.with_vehicle_type(v);
    }
    Ok(descriptor)
}

fn load_response_config(path: Option<&str>) -> Result<ResponseConfig, CliError> {
    match path {
        None => Ok(ResponseConfig::default()),
        Some(path) => Ok(ResponseConfig::from_json_str(&std::fs::read_to_string(
            path,
        )?)?),
    }
}

fn write_json(value: &impl Serialize, pretty: bool) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    if pretty {
        serde_json::to_writer_pretty(&mut stdout, value)?;
    } else {
        serde_json::to_writer(&mut stdout, value)?;
    }
    writeln!(stdout)?;
    Ok(())
}

fn write_text(text: &str, out: Option<&str>) -> Result<(), CliError> {
    match out {
        None | Some("-") => {
            print!("{text}");
            Ok(())
        }
        Some(path) => {
            std::fs::write(path, text)?;
            Ok(())
        }
    }
}

fn write_bytes(bytes: &[u8], out: &str) -> Result<(), CliError> {
    if out == "-" {
        std::io::stdout().lock().write_all(bytes)?;
    } else {
        std::fs::write(out, bytes)?;
    }
    Ok(())
}

fn default_raster_out_path(input: Option<&str>, ext: &str) -> std::path::PathBuf {
    match input {
        Some(path) if path != "-" => std::path::PathBuf::from(path).with_extension(ext),
        _ => std::path::PathBuf::from(format!("out.{ext}")),
    }
}

fn write_response(resp: &RenderResponse) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "HTTP/1.1 {} OK", resp.status)?;
    for (name, value) in &resp.headers {
        writeln!(stdout, "{name}: {value}")?;
    }
    writeln!(stdout)?;
    stdout.write_all(resp.body.as_bytes())?;
    Ok(())
}

fn run(args: Args) -> Result<(), CliError> {
    let descriptor = build_descriptor(&args)?;
    let renderer = VehicleRenderer::new()
        .force_fallback(args.force_fallback)
        .with_response_config(load_response_config(args.config.as_deref())?);

    match args.command {
        Command::Classify => {
            println!("{}", renderer.engine.classifier().classify(&descriptor));
            Ok(())
        }
        Command::Seed => {
            println!("{}", Seed::from_descriptor(&descriptor));
            Ok(())
        }
        Command::Inspect => {
            let identity = renderer.resolve(&descriptor)?;
            let out = InspectOut {
                label: &identity.label,
                kind: identity.kind,
                seed: identity.seed,
                personality: identity.personality(),
            };
            write_json(&out, args.pretty)
        }
        Command::Respond => {
            let rendered = block_on(renderer.render_svg(&descriptor));
            let resp = vehicle_form::render::respond(rendered, &renderer.response);
            write_response(&resp)
        }
        Command::Render => {
            let rendered = block_on(renderer.render_svg(&descriptor));
            if rendered.fallback {
                tracing::info!("served the fallback rendition");
            }

            let raster_opts = RasterOptions {
                scale: args.render_scale,
                background: args.background.clone(),
                ..RasterOptions::default()
            };
            let bytes = match args.render_format {
                RenderFormat::Svg => return write_text(&rendered.svg, args.out.as_deref()),
                RenderFormat::Png => raster::svg_to_png(&rendered.svg, &raster_opts)?,
                RenderFormat::Jpeg => raster::svg_to_jpeg(&rendered.svg, &raster_opts)?,
                RenderFormat::Pdf => raster::svg_to_pdf(&rendered.svg)?,
            };
            let out = args.out.clone().unwrap_or_else(|| {
                default_raster_out_path(args.input.as_deref(), args.render_format.extension())
                    .to_string_lossy()
                    .to_string()
            });
            write_bytes(&bytes, &out)
        }
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();
}

fn main() {
    init_tracing();

    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = run(args) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
