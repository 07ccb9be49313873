use std::sync::Arc;

use clap::{Parser, Subcommand};
use uvecheck_core::{
    constants::TODAY_ENV_VAR, parse_date, today_from_env_value, AssessmentService, CoreConfig,
    Guideline, PatientRecord, RiskAssessment,
};

#[derive(Parser)]
#[command(name = "uvecheck")]
#[command(about = "Uveitis screening risk assessment for juvenile idiopathic arthritis")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Assess one patient under a guideline
    Assess {
        /// Guideline identifier (e.g. NORDIC, us-pakistan)
        #[arg(long)]
        guideline: String,
        /// Date of birth (YYYY-MM-DD)
        #[arg(long)]
        birth_date: String,
        /// Date of arthritis diagnosis (YYYY-MM-DD)
        #[arg(long)]
        diagnosis_date: String,
        /// Sub-diagnosis label, as listed by `uvecheck questions`
        #[arg(long)]
        sub_diagnosis: String,
        /// Antinuclear antibody result (yes/no)
        #[arg(long, default_value = "")]
        ana: String,
        /// On methotrexate (yes/no)
        #[arg(long, default_value = "")]
        methotrexate: String,
        /// Biologic treatment label
        #[arg(long, default_value = "")]
        biologic: String,
        /// Evaluate as of this date instead of today (YYYY-MM-DD)
        #[arg(long)]
        today: Option<String>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// List supported guidelines
    Guidelines,
    /// Show the questions a guideline asks
    Questions {
        /// Guideline identifier
        guideline: String,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Assess {
            guideline,
            birth_date,
            diagnosis_date,
            sub_diagnosis,
            ana,
            methotrexate,
            biologic,
            today,
            json,
        }) => {
            let fixed_today = match today {
                Some(value) => Some(parse_date(&value)?),
                None => today_from_env_value(std::env::var(TODAY_ENV_VAR).ok())?,
            };
            let guideline: Guideline = guideline.parse()?;
            let patient = PatientRecord::from_answers(
                &birth_date,
                &diagnosis_date,
                &sub_diagnosis,
                &ana,
                &methotrexate,
                &biologic,
            )?;

            let service = AssessmentService::new(Arc::new(CoreConfig::new(fixed_today)));
            let assessment = service.assess(guideline, &patient);

            if json {
                println!("{}", serde_json::to_string_pretty(&assessment)?);
            } else {
                print!("{}", render(guideline, &assessment));
            }
        }
        Some(Commands::Guidelines) => {
            for guideline in Guideline::ALL {
                println!("{:<16} {}", guideline.id(), guideline.display_name());
            }
        }
        Some(Commands::Questions { guideline }) => {
            let guideline: Guideline = guideline.parse()?;
            println!("{}", guideline.display_name());
            for (index, question) in guideline.questions().iter().enumerate() {
                println!("{}. {} [{}]", index + 1, question.label, question.key);
                for option in &question.options {
                    println!("     - {}", option);
                }
            }
        }
        None => {
            println!("Use 'uvecheck --help' for commands");
        }
    }

    Ok(())
}

fn render(guideline: Guideline, assessment: &RiskAssessment) -> String {
    let mut out = format!(
        "{}\nRisk level:     {}\nRecommendation: {}\nFollow up:      {}\nJustification:  {}\n",
        guideline.display_name(),
        assessment.risk_level,
        assessment.recommendation,
        assessment.follow_up,
        assessment.justification,
    );
    if let Some(inputs) = &assessment.inputs {
        out.push_str(&format!(
            "Current age:    {}\nAge at onset:   {}\nSince diagnosis: {}\n",
            inputs.current_age, inputs.age_at_onset, inputs.time_since_diagnosis
        ));
    }
    out
}
