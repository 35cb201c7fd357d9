use clap::Parser;
use signup_form::core::render::render;
use signup_form::utils::{logger, validation::Validate};
use signup_form::{ClientConfig, FormController, FormEvent, HttpSignupGateway, SubmitOutcome};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ClientConfig::parse();

    logger::init_cli_logger(config.verbose);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let values = match config.form_values() {
        Ok(values) => values,
        Err(e) => {
            tracing::error!("❌ Failed to load form values: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    let gateway = HttpSignupGateway::new(config.endpoint.clone());
    let mut controller = FormController::new(gateway);

    // replay the inputs so every field gets its live check
    for event in values.events() {
        let field = match &event {
            FormEvent::Input(field, _) => *field,
            FormEvent::Toggle(_) => signup_form::Field::Terms,
        };
        controller.apply(event);
        match controller.state().errors.get(field) {
            Some(message) => println!("  • {:<9} {}", field.id(), message),
            None => println!("  • {:<9} ok", field.id()),
        }
    }

    tracing::info!("📤 Submitting to {}", controller.gateway().endpoint());
    let outcome = controller.submit().await;
    println!("{}", render(controller.state()));

    match outcome {
        SubmitOutcome::Created(_) => Ok(()),
        SubmitOutcome::Invalid | SubmitOutcome::Busy | SubmitOutcome::Failed => {
            std::process::exit(1);
        }
    }
}
