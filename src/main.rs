use clap::{Parser, ValueEnum};
use serde::Serialize;
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process;

use pgntoboard::{
    board_pieces, build_game, last_move_destination, parse_headers, GamePositions, PlacedPiece,
};

/// Convert a PGN game into per-ply board positions
///
/// Reads one game's PGN (headers, comments and variations are discarded),
/// reconstructs the board after every ply and writes the resulting position
/// sequence to a file, either as ASCII diagrams or as a JSON piece list per
/// ply. Moves that cannot be resolved are reported on stderr and skipped;
/// the sequence continues from the unchanged position.
#[derive(Parser)]
#[command(name = "pgntoboard")]
#[command(about = "Convert PGN movetext to per-ply board positions")]
#[command(version = "0.1.0")]
struct Args {
    /// Path to the PGN file to convert
    #[arg(value_name = "GAME")]
    game: PathBuf,

    /// Output file (if not specified, uses the PGN name with a .positions extension)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Force overwrite existing output file
    #[arg(short, long)]
    force: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "ascii")]
    format: OutputFormat,

    /// Maximum number of positions to write, including the initial one (0 = all)
    #[arg(long, default_value = "0")]
    max_plies: usize,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// One ASCII diagram per ply
    Ascii,
    /// JSON document with headers and a piece list per ply
    Json,
}

#[derive(Serialize)]
struct PlyOutput {
    ply: usize,
    last_move: Option<String>,
    pieces: Vec<PlacedPiece>,
}

#[derive(Serialize)]
struct GameOutput {
    headers: HashMap<String, String>,
    plies: Vec<PlyOutput>,
}

fn main() {
    let args = Args::parse();

    // Determine output file path
    let output_path = match args.output {
        Some(path) => path,
        None => {
            let mut path = args.game.clone();
            path.set_extension("positions");
            path
        }
    };

    // Check if output file exists and we're not forcing overwrite
    if output_path.exists() && !args.force {
        eprintln!(
            "Error: Output file '{}' already exists. Use --force to overwrite.",
            output_path.display()
        );
        process::exit(1);
    }

    println!(
        "Converting PGN game '{}' to board positions...",
        args.game.display()
    );

    let text = match fs::read_to_string(&args.game) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Error reading PGN file: {}", e);
            process::exit(1);
        }
    };

    let headers = parse_headers(&text);
    let game = build_game(&text);

    println!(
        "Parsed {} move records into {} positions",
        game.records.len(),
        game.positions.len()
    );

    match write_positions(&game, headers, &output_path, args.format, args.max_plies) {
        Ok(written) => {
            println!(
                "Successfully wrote {} positions to '{}'",
                written,
                output_path.display()
            );
        }
        Err(e) => {
            eprintln!("Error writing positions: {}", e);
            process::exit(1);
        }
    }
}

fn write_positions(
    game: &GamePositions,
    headers: HashMap<String, String>,
    output_path: &Path,
    format: OutputFormat,
    max_plies: usize,
) -> io::Result<usize> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);

    let limit = if max_plies > 0 {
        max_plies.min(game.positions.len())
    } else {
        game.positions.len()
    };

    match format {
        OutputFormat::Ascii => {
            for (ply, board) in game.positions.iter().take(limit).enumerate() {
                match last_move_destination(&game.records, ply) {
                    Some(dest) => writeln!(writer, "; ply {} (to {})", ply, dest)?,
                    None => writeln!(writer, "; ply {}", ply)?,
                }
                write!(writer, "{}", board.ascii())?;
                writeln!(writer)?;
            }
        }
        OutputFormat::Json => {
            let plies = game
                .positions
                .iter()
                .take(limit)
                .enumerate()
                .map(|(ply, board)| PlyOutput {
                    ply,
                    last_move: last_move_destination(&game.records, ply),
                    pieces: board_pieces(board),
                })
                .collect();
            let output = GameOutput { headers, plies };
            serde_json::to_writer_pretty(&mut writer, &output)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?;
            writeln!(writer)?;
        }
    }

    writer.flush()?;
    Ok(limit)
}
