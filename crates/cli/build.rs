use std::{env, fs, path::PathBuf};

fn selector_args(cmd: clap::Command) -> clap::Command {
    cmd.arg(clap::arg!(--title_selector <SEL> "CSS selector for the article title").default_value("h1"))
        .arg(clap::arg!(--body_selector <SEL> "CSS selector for the article body container").default_value("div.td-post-content"))
}

fn fetch_args(cmd: clap::Command) -> clap::Command {
    selector_args(
        cmd.arg(
            clap::arg!(<INPUT> "Record table (.xlsx or .csv) with URL and URL_ID columns")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(
            clap::arg!(-d --dir <DIR> "Directory receiving <URL_ID>.txt files")
                .default_value(".")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(clap::arg!(--timeout <SECS> "HTTP timeout in seconds").default_value("30"))
        .arg(clap::arg!(--user_agent <UA> "Custom User-Agent for HTTP requests").value_name("UA")),
    )
}

fn analyze_args(cmd: clap::Command) -> clap::Command {
    cmd.arg(clap::arg!(--prefix <PREFIX> "Only files whose names start with this prefix are analyzed").default_value("bctech"))
        .arg(
            clap::arg!(-o --output <FILE> "Output table")
                .default_value("final_output.csv")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(
            clap::arg!(-f --format <FORMAT> "Output format (csv, json)")
                .default_value("csv")
                .value_parser(["csv", "json"]),
        )
        .arg(
            clap::arg!(--lexicon_dir <DIR> "Directory with stopwords.txt, positive-words.txt, negative-words.txt")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=OUT_DIR");

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let completions_dir = out_dir.join("completions");

    fs::create_dir_all(&completions_dir).unwrap();

    let extract = selector_args(
        clap::Command::new("extract")
            .about("Extract an article from a local HTML file")
            .arg(clap::arg!(<FILE> "HTML file to read").value_parser(clap::value_parser!(std::path::PathBuf)))
            .arg(clap::arg!(--id <ID> "Identifier used as the output file stem"))
            .arg(clap::arg!(-d --dir <DIR> "Directory receiving the text file").default_value(".")),
    );

    let analyze = analyze_args(
        clap::Command::new("analyze")
            .about("Compute metrics for every matching text file in a directory")
            .arg(clap::arg!([DIR] "Directory holding the text files").default_value(".")),
    );

    let mut cmd = clap::Command::new("lexometer")
        .version("0.1.0")
        .author("Lexometer Contributors")
        .about("Extract articles and compute readability and sentiment metrics")
        .arg(clap::arg!(-v --verbose "Enable debug logging").global(true))
        .subcommand(fetch_args(
            clap::Command::new("fetch").about("Fetch every URL in a record table and save article text"),
        ))
        .subcommand(extract)
        .subcommand(analyze)
        .subcommand(analyze_args(fetch_args(
            clap::Command::new("run").about("Fetch, then analyze the fetched files"),
        )));

    clap_complete::generate_to(clap_complete::shells::Bash, &mut cmd, "lexometer", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Zsh, &mut cmd, "lexometer", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Fish, &mut cmd, "lexometer", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::PowerShell, &mut cmd, "lexometer", &completions_dir).unwrap();

    println!(
        "cargo:warning=Shell completions generated in: {}",
        completions_dir.display()
    );
}
