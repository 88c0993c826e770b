use std::path::PathBuf;

use chrono::Utc;
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use resumeanalyzer::analysis::DocumentOutcome;
use resumeanalyzer::config::{load_job_configs, ClassifierBackend};
use resumeanalyzer::models::{AnalysisReport, JobRequirement, RawDocument};
use resumeanalyzer::{extract_text, AnalysisPipeline, Classifiers, Config, PipelineConfig};

#[derive(Parser, Debug)]
#[command(name = "resumeanalyzer")]
#[command(version = "0.1.0")]
#[command(about = "Match resumes against job requirement profiles")]
struct Args {
    /// Resume files to analyze (PDF or plain text)
    #[arg(required_unless_present = "list_jobs")]
    resumes: Vec<PathBuf>,

    /// Job id from the job catalog
    #[arg(short, long, required_unless_present_any = ["list_jobs", "sections"])]
    job: Option<String>,

    /// Job catalog path (overrides JOB_CONFIGS_PATH)
    #[arg(long)]
    jobs_file: Option<String>,

    /// Output format (json, text, markdown)
    #[arg(short, long, default_value = "text")]
    format: String,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<String>,

    /// Use the offline lexical classifiers instead of the inference API
    #[arg(long)]
    offline: bool,

    /// List the jobs in the catalog and exit
    #[arg(long)]
    list_jobs: bool,

    /// Print the detected resume sections instead of analyzing
    #[arg(long)]
    sections: bool,
}

#[derive(Serialize)]
struct OutcomeOutput<'a> {
    file: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    report: Option<&'a AnalysisReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("resumeanalyzer=info".parse()?)
                .add_directive("reqwest=warn".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let mut config = Config::from_env()?;
    if args.offline {
        config.classifier_backend = ClassifierBackend::Lexical;
    }
    if let Some(ref path) = args.jobs_file {
        config.job_configs_path = path.clone();
    }

    if args.list_jobs {
        let jobs = load_job_configs(&config.job_configs_path)?;
        return write_output(&format_job_list(&jobs), &args);
    }

    let documents = args
        .resumes
        .iter()
        .map(RawDocument::from_path)
        .collect::<Result<Vec<_>, _>>()?;

    if args.sections {
        return output_sections(&documents, &args);
    }

    let jobs = load_job_configs(&config.job_configs_path)?;

    let job_id = args.job.as_deref().unwrap_or_default();
    let job = jobs
        .get(job_id)
        .ok_or_else(|| anyhow::anyhow!("Unknown job '{}'. Use --list-jobs to see available jobs", job_id))?;

    // Classifiers are built once and shared by every analysis
    tracing::info!("Classifier backend: {}", config.classifier_backend);
    let classifiers = Classifiers::from_config(&config)?;
    let pipeline = AnalysisPipeline::new(classifiers, PipelineConfig::from(&config));

    tracing::info!(
        "Analyzing {} resume(s) against job '{}'",
        documents.len(),
        job_id
    );
    let outcomes = pipeline.analyze_documents(&documents, job).await;

    let output = match args.format.as_str() {
        "json" => format_json(&outcomes)?,
        "markdown" => format_markdown(&outcomes, job_id, job),
        _ => format_text(&outcomes, job_id, job),
    };
    write_output(&output, &args)?;

    if outcomes.iter().all(|o| o.result.is_err()) {
        anyhow::bail!("No resume could be analyzed");
    }

    Ok(())
}

fn write_output(output: &str, args: &Args) -> anyhow::Result<()> {
    if let Some(ref path) = args.output {
        std::fs::write(path, output)?;
        tracing::info!("Output written to: {}", path);
    } else {
        println!("{}", output);
    }

    Ok(())
}

fn output_sections(documents: &[RawDocument], args: &Args) -> anyhow::Result<()> {
    let mut output = String::new();

    for document in documents {
        let text = extract_text(document)?;
        let sections = resumeanalyzer::analysis::segment(&text);

        if args.format == "json" {
            output.push_str(&serde_json::to_string_pretty(&sections)?);
            output.push('\n');
            continue;
        }

        output.push_str(&format!("=== Sections: {} ===\n", document.name));
        for (section, body) in sections.iter() {
            output.push_str(&format!("\n[{}]\n", section));
            if body.is_empty() {
                output.push_str("  (empty)\n");
            } else {
                for line in body.lines() {
                    output.push_str(&format!("  {}\n", line));
                }
            }
        }
        output.push('\n');
    }

    write_output(&output, args)
}

fn format_job_list(jobs: &std::collections::BTreeMap<String, JobRequirement>) -> String {
    let mut output = String::from("Available jobs:\n");

    for (id, job) in jobs {
        output.push_str(&format!(
            "  - {}{}: {} (min {} years)\n",
            id,
            job.title
                .as_ref()
                .map(|t| format!(" ({})", t))
                .unwrap_or_default(),
            job.required_skills.join(", "),
            job.required_experience.years
        ));
    }

    output
}

fn format_json(outcomes: &[DocumentOutcome]) -> anyhow::Result<String> {
    let entries: Vec<_> = outcomes
        .iter()
        .map(|o| OutcomeOutput {
            file: &o.name,
            report: o.result.as_ref().ok(),
            error: o.result.as_ref().err().map(|e| e.to_string()),
        })
        .collect();

    Ok(serde_json::to_string_pretty(&entries)?)
}

fn format_text(outcomes: &[DocumentOutcome], job_id: &str, job: &JobRequirement) -> String {
    let mut output = String::new();

    for outcome in outcomes {
        output.push_str(&format!(
            "\n=== Resume Analysis: {} ===\n\n",
            outcome.name
        ));
        output.push_str(&format!(
            "Job: {}\n",
            job.title.as_deref().unwrap_or(job_id)
        ));

        let report = match &outcome.result {
            Ok(report) => report,
            Err(e) => {
                output.push_str(&format!("Error: {}\n", e));
                continue;
            }
        };

        output.push_str(&format!("Match Score: {:.2}/100\n\n", report.match_score));

        // Skills
        output.push_str("Skills Match:\n");
        for skill in &report.skills_match {
            let indicator = if skill.match_score >= 70.0 { "+" } else { "-" };
            output.push_str(&format!(
                "  {} {}: {:.2}/100\n",
                indicator, skill.name, skill.match_score
            ));
        }

        // Experience
        let exp = &report.experience_analysis;
        output.push_str("\nExperience:\n");
        output.push_str(&format!("  Score: {:.2}/100\n", exp.score));
        output.push_str(&format!(
            "  Years: {} (required: {})\n",
            exp.years, job.required_experience.years
        ));
        output.push_str(&format!("  Relevance: {:.2}%\n", exp.relevance));
        output.push_str(&format!("  {}\n", exp.analysis));

        // Recommendations
        output.push_str("\nRecommendations:\n");
        for rec in &report.recommendations {
            output.push_str(&format!("  * {}\n", rec));
        }
    }

    output.push_str(&format!(
        "\nAnalyzed on: {}\n",
        Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    ));

    output
}

fn format_markdown(outcomes: &[DocumentOutcome], job_id: &str, job: &JobRequirement) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "# Resume Analysis: {}\n\n",
        job.title.as_deref().unwrap_or(job_id)
    ));
    output.push_str(&format!(
        "**Required skills:** {}  \n**Required experience:** {} years\n\n",
        job.required_skills.join(", "),
        job.required_experience.years
    ));

    for outcome in outcomes {
        output.push_str(&format!("## {}\n\n", outcome.name));

        let report = match &outcome.result {
            Ok(report) => report,
            Err(e) => {
                output.push_str(&format!("> Analysis failed: {}\n\n", e));
                continue;
            }
        };

        output.push_str("| Metric | Value |\n|--------|-------|\n");
        output.push_str(&format!("| Match Score | {:.2} |\n", report.match_score));
        output.push_str(&format!("| Skills Score | {:.2} |\n", report.skills_score()));
        output.push_str(&format!(
            "| Experience Score | {:.2} |\n",
            report.experience_analysis.score
        ));
        output.push_str(&format!(
            "| Years Detected | {} |\n",
            report.experience_analysis.years
        ));
        output.push_str(&format!(
            "| Relevance | {:.2}% |\n",
            report.experience_analysis.relevance
        ));

        output.push_str("\n### Skills\n\n");
        output.push_str("| Skill | Score |\n|-------|-------|\n");
        for skill in &report.skills_match {
            output.push_str(&format!("| {} | {:.2} |\n", skill.name, skill.match_score));
        }

        output.push_str(&format!(
            "\n### Experience\n\n{}\n",
            report.experience_analysis.analysis
        ));

        output.push_str("\n### Recommendations\n\n");
        for rec in &report.recommendations {
            output.push_str(&format!("- {}\n", rec));
        }
        output.push('\n');
    }

    output.push_str(&format!(
        "---\n*Analyzed on {}*\n",
        Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    ));

    output
}
