//! # Vitae CLI
//!
//! Usage:
//!   vitae resume.json -o resume.pdf
//!   echo '{ ... }' | vitae -o resume.pdf
//!   vitae --example > resume.json

use std::env;
use std::fs;
use std::io::{self, Read};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    // Handle --example flag
    if args.iter().any(|a| a == "--example") {
        print!("{}", example_resume_json());
        return ExitCode::SUCCESS;
    }

    // Read input
    let input = if args.len() > 1 && !args[1].starts_with('-') {
        match fs::read_to_string(&args[1]) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("✗ Failed to read {}: {}", args[1], e);
                return ExitCode::FAILURE;
            }
        }
    } else {
        let mut buf = String::new();
        if let Err(e) = io::stdin().read_to_string(&mut buf) {
            eprintln!("✗ Failed to read stdin: {}", e);
            return ExitCode::FAILURE;
        }
        buf
    };

    // Parse output path
    let output_path = args
        .windows(2)
        .find(|w| w[0] == "-o")
        .map(|w| w[1].clone())
        .unwrap_or_else(|| "resume.pdf".to_string());

    // Render
    match vitae::render_json(&input) {
        Ok(pdf_bytes) => {
            if let Err(e) = fs::write(&output_path, &pdf_bytes) {
                eprintln!("✗ Failed to write {}: {}", output_path, e);
                return ExitCode::FAILURE;
            }
            eprintln!("✓ Written {} bytes to {}", pdf_bytes.len(), output_path);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("✗ {}", e);
            ExitCode::FAILURE
        }
    }
}

fn example_resume_json() -> &'static str {
    r##"{
  "fullName": "Jane Doe",
  "email": "jane.doe@example.com",
  "phone": "+1 555-0100",
  "location": "Portland, OR",
  "github": "github.com/janedoe",
  "summary": "Backend engineer with eight years of experience building storage and messaging systems. Comfortable owning services from design through production operation.",
  "experience": [
    {
      "jobTitle": "Senior Software Engineer",
      "company": "Acme Cloud",
      "location": "Portland, OR",
      "startDate": "2021-03",
      "description": "Lead engineer on the object storage gateway. Cut tail latency 40% by rewriting the request scheduler and introduced a tiered cache that saved $30k/month in egress."
    },
    {
      "jobTitle": "Software Engineer",
      "company": "Widget Industries",
      "startDate": "2017-06",
      "endDate": "2021-02",
      "description": "Built the internal job queue powering all batch processing. Migrated the billing pipeline from cron scripts to an event-driven design with exactly-once semantics."
    }
  ],
  "education": [
    {
      "degree": "B.S. Computer Science",
      "institution": "Oregon State University",
      "location": "Corvallis, OR",
      "graduationDate": "2017-05"
    }
  ],
  "skills": ["Rust", "Go", "PostgreSQL", "Kafka", "Kubernetes", "Terraform"],
  "languages": [
    { "language": "English", "proficiency": "Native" },
    { "language": "Spanish", "proficiency": "Conversational" }
  ],
  "certifications": [
    { "name": "CKA: Certified Kubernetes Administrator", "issuer": "CNCF", "date": "2023" }
  ]
}"##
}
