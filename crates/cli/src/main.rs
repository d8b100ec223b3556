use std::{fs, process};

use clap::Parser;
use tracing_subscriber::EnvFilter;
use wugraph_cli::{App, Command};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let app = App::parse();
    match &app.command {
        Command::Generate(args) => generate(args),
        Command::Mst(args) => mst(args),
    }
}

fn generate(args: &wugraph_cli::GenerateArgs) {
    fs::create_dir_all(&args.output_dir).unwrap_or_else(|e| {
        eprintln!("Failed to create output directory: {e}");
        process::exit(1);
    });

    let graphs = wugraph_testgen::generator::generate_mult_graphs(
        args.n_graph,
        args.n_vertex,
        args.n_edge,
        args.max_weight,
    );

    for graph in &graphs {
        let path = args.output_dir.join(format!("{}.json", graph.get_id()));
        let file = fs::File::create(&path).unwrap_or_else(|e| {
            eprintln!("Failed to create {}: {e}", path.display());
            process::exit(1);
        });
        serde_json::to_writer_pretty(file, graph).unwrap_or_else(|e| {
            eprintln!("Failed to write {}: {e}", path.display());
            process::exit(1);
        });
    }

    println!(
        "Generated {} graphs to {}",
        graphs.len(),
        args.output_dir.display()
    );
}

fn mst(args: &wugraph_cli::MstArgs) {
    let mut entries: Vec<_> = fs::read_dir(&args.input_dir)
        .unwrap_or_else(|e| {
            eprintln!("Failed to read input directory: {e}");
            process::exit(1);
        })
        .filter_map(Result::ok)
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "json"))
        .collect();

    entries.sort_by_key(fs::DirEntry::path);

    if entries.is_empty() {
        eprintln!("No .json files found in {}", args.input_dir.display());
        process::exit(1);
    }

    for entry in entries {
        let path = entry.path();
        let filename = path.file_name().unwrap_or_default().to_string_lossy();

        let file = fs::File::open(&path).unwrap_or_else(|e| {
            eprintln!("Failed to open {filename}: {e}");
            process::exit(1);
        });

        let sample: wugraph_testgen::generator::GraphSample = serde_json::from_reader(file)
            .unwrap_or_else(|e| {
                eprintln!("Failed to parse {filename}: {e}");
                process::exit(1);
            });

        let graph = sample.to_graph();
        let tree = wugraph_core::min_span_tree(&graph);
        let total = wugraph_core::total_weight(&tree);

        if args.json {
            let mut result = serde_json::json!({
                "file": filename,
                "vertices": graph.vertex_count(),
                "edges": graph.edge_count(),
                "tree_edges": tree.edge_count(),
                "total_weight": total,
            });
            if args.verbose {
                result["tree"] = serde_json::json!(tree.edge_list());
            }
            match serde_json::to_string(&result) {
                Ok(line) => println!("{line}"),
                Err(e) => {
                    eprintln!("Failed to encode result for {filename}: {e}");
                    process::exit(1);
                }
            }
        } else {
            println!(
                "{filename}: vertices={} edges={} tree_edges={} total_weight={total}",
                graph.vertex_count(),
                graph.edge_count(),
                tree.edge_count(),
            );
            if args.verbose {
                for (u, v, w) in tree.edge_list() {
                    println!("  {u} - {v}: {w}");
                }
            }
        }
    }
}
