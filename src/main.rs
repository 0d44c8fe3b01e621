#[macro_use] extern crate log;

mod args;

use std::env::args as env_args;
use std::io::stdout;
use std::io::Write;
use std::process::exit;

use bmpdraw::draw_line;
use bmpdraw::preview;
use bmpdraw::Error;
use bmpdraw::Image;
use bmpdraw::Pixel;

use args::prompt;
use args::Args;

/// Log filter used when `RUST_LOG` is not set
const DEFAULT_LOG_FILTER: &str = "warn";

/// Load failures are already reported on stderr as one line, the details
/// only show up with a more verbose `RUST_LOG`
const LOAD_FAILURE_LOG_LEVEL: log::Level = log::Level::Debug;

fn usage() {
    print!(
r#"
Bitmap line drawing tool

Loads a 24 or 32 bit bitmap, previews it, draws both diagonals in white,
previews it again and saves the result.

Options:
  -i, --input <input_file>   - sets the input image.
                                 Default: asked on stdin
  -o, --output <destiny>     - sets the output image.
                                 Default: asked on stdin
  -q, --quiet                - do not print the previews
  -h, --help                 - show this message

Usage:
  bmpdraw [-i <input>] [-o <output>] [-q]
"#
    )
}

/// One line description of a failed load
fn load_error_message(path: &str, err: &Error) -> String {
    match *err {
        Error::InvalidFormat => String::from("error: invalid bmp file"),
        Error::InvalidDepth(_) => String::from("error: unsupported depth"),
        Error::Io(ref io) => format!("file `{}` error: {}", path, io),
        ref other => format!("error: {}", other),
    }
}

fn show(image: &Image, args: &Args) -> Result<(), Error> {
    if args.quiet {
        return Ok(())
    }
    let stdout = stdout();
    let mut out = stdout.lock();
    writeln!(out)?;
    preview::display(&mut out, image)?;
    writeln!(out)?;
    Ok(())
}

fn process(mut image: Image, args: &Args) -> Result<(), Error> {
    let (width, height) = image.dimension();
    debug!("loaded {}x{} image, {} bits per pixel, stride {}",
           width, height, image.bit_depth(), image.stride());

    show(&image, args)?;

    if width > 0 && height > 0 {
        let (right, bottom) = ((width - 1) as i32, (height - 1) as i32);
        draw_line(&mut image, (0, 0), (right, bottom), Pixel::WHITE)?;
        draw_line(&mut image, (right, 0), (0, bottom), Pixel::WHITE)?;
    } else {
        warn!("empty image, nothing to draw");
    }

    show(&image, args)?;

    let output = match args.output {
        Some(ref path) => path.clone(),
        None => prompt("out file path: ")?,
    };

    image.save_to(&output)?;
    info!("saved {}", output);
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER))
        .target(env_logger::Target::Stderr)
        .init();

    let args = match Args::from_env_args(env_args().skip(1)) {
        Ok(args) => args,
        Err(err) => {
            eprintln!("Error: {}", err);
            exit(1);
        }
    };

    if args.help {
        usage();
        return
    }

    let input = match args.input {
        Some(ref path) => path.clone(),
        None => match prompt("bmp file path: ") {
            Ok(path) => path,
            Err(err) => {
                eprintln!("Error: {}", err);
                exit(1);
            }
        },
    };

    let image = match Image::open(&input) {
        Ok(image) => image,
        Err(err) => {
            log!(LOAD_FAILURE_LOG_LEVEL, "loading {} failed: {:?}", input, err);
            eprintln!("{}", load_error_message(&input, &err));
            exit(1);
        }
    };
    info!("loaded {}", input);

    if let Err(err) = process(image, &args) {
        eprintln!("error: {}", err);
        exit(1);
    }
}

#[cfg(test)]
mod tests {
    use std::io::Error as IoError;
    use std::io::ErrorKind as IoErrorKind;

    use log::LevelFilter;

    use super::*;

    #[test]
    fn load_failure_is_one_line_by_default() {
        let default: LevelFilter = DEFAULT_LOG_FILTER.parse().unwrap();
        assert!(LOAD_FAILURE_LOG_LEVEL > default, "load failure would also be logged");

        let io = Error::Io(IoError::new(IoErrorKind::NotFound, "not found"));
        let errors = [Error::InvalidFormat, Error::InvalidDepth(16), Error::OutOfBounds, io];
        for err in errors.iter() {
            assert!(!load_error_message("in.bmp", err).contains('\n'));
        }
    }

    #[test]
    fn load_errors_are_told_apart() {
        assert_eq!(load_error_message("a.bmp", &Error::InvalidFormat), "error: invalid bmp file");
        assert_eq!(load_error_message("a.bmp", &Error::InvalidDepth(8)), "error: unsupported depth");
        assert_eq!(
            load_error_message("a.bmp", &Error::unsupported("negative dimensions")),
            "error: unsupported bitmap: negative dimensions");

        let io = Error::Io(IoError::new(IoErrorKind::NotFound, "not found"));
        assert_eq!(load_error_message("a.bmp", &io), "file `a.bmp` error: not found");
    }
}
