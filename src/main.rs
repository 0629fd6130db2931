use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use brookc::ast::printer::AstPrinter;
use brookc::driver;

const USAGE: &str = "usage: brookc <file.bk> [--print-ast]";

struct Options {
    path: PathBuf,
    print_ast: bool,
}

fn parse_args() -> Result<Options, String> {
    let mut path = None;
    let mut print_ast = false;

    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--print-ast" => print_ast = true,
            _ if path.is_none() => path = Some(PathBuf::from(arg)),
            _ => return Err(format!("unexpected argument '{}'", arg)),
        }
    }

    match path {
        Some(path) => Ok(Options { path, print_ast }),
        None => Err("missing input file".to_string()),
    }
}

fn main() -> ExitCode {
    let options = match parse_args() {
        Ok(options) => options,
        Err(message) => {
            eprintln!("error: {}", message);
            eprintln!("{}", USAGE);
            return ExitCode::FAILURE;
        }
    };

    let compilation = driver::compile_file(&options.path);

    if compilation.diagnostics.has_problems() {
        let mut stderr = std::io::stderr().lock();
        if compilation.diagnostics.emit_diagnostics(&mut stderr).is_err() {
            return ExitCode::FAILURE;
        }
        return ExitCode::FAILURE;
    }

    // No problems means parsing ran and produced a tree.
    if let Some(source_file) = &compilation.source_file {
        if options.print_ast {
            print!("{}", AstPrinter::new().print(source_file));
        } else {
            println!(
                "{}: {} declaration(s), no errors",
                options.path.display(),
                source_file.decls.len()
            );
        }
    }

    ExitCode::SUCCESS
}
