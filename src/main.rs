use clap::Parser;
use course_storefront::app::{route, FeesView, Handled};
use course_storefront::domain::model::{CourseGroup, Money};
use course_storefront::utils::error::ErrorSeverity;
use course_storefront::utils::logger;
use course_storefront::{
    CliConfig, Command, ConsoleAlerts, FileStore, LoggingNavigator, RegistrationForm, Result,
    Screen, Storefront, StorefrontConfig,
};
use serde::Serialize;

type CliStorefront = Storefront<FileStore, LoggingNavigator, ConsoleAlerts>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 載入並驗證配置
    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // 初始化日誌
    logger::init_cli_logger(cli.verbose, config.log_format());

    tracing::info!("Starting course-storefront");
    // config source, logged once the subscriber is installed
    if let Some(path) = &cli.config {
        tracing::info!("📁 Loaded configuration from: {}", path);
    }
    if let Some(store) = &cli.store {
        tracing::debug!("🔧 Store path overridden to: {}", store);
    }
    tracing::debug!("CLI config: {:?}", cli);

    let store = FileStore::new(config.store_path());
    tracing::debug!("📁 Store directory: {}", store.base_path().display());
    let storefront = Storefront::new(
        store,
        config.empty_checkout(),
        LoggingNavigator,
        ConsoleAlerts,
    );

    match run(&storefront, &cli, &config).await {
        Ok(0) => Ok(()),
        Ok(code) => std::process::exit(code),
        Err(e) => {
            tracing::error!(
                "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 1,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 3,
                ErrorSeverity::Critical => 4,
            };
            std::process::exit(exit_code);
        }
    }
}

/// Exit code for a handler that already showed its failure to the user.
const HANDLED_FAILURE: i32 = 2;

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn format_money(amount: Money, config: &StorefrontConfig) -> String {
    format!("{} {}", amount, config.currency())
}

fn print_fees(view: &FeesView, config: &StorefrontConfig) {
    if view.lines.is_empty() {
        println!("No courses selected.");
    }
    for line in &view.lines {
        println!("  {} - {}", line.course, format_money(line.price, config));
    }
    println!("Total Fees: {}", format_money(view.quote.subtotal, config));
    if view.quote.discount_amount > Money::ZERO {
        println!(
            "Discount Applied ({}): {}",
            view.quote.discount_rate,
            format_money(view.quote.discount_amount, config)
        );
    }
    println!("Final Total: {}", format_money(view.quote.total, config));
}

#[derive(Serialize)]
struct CourseSummary<'a> {
    name: &'a str,
    price: Money,
    group: CourseGroup,
}

/// Runs the rendering step of a completed handler, keeping alerted or invalid outcomes as-is.
fn finish<T>(handled: Handled<T>, render: impl FnOnce(T) -> Result<()>) -> Result<Handled<()>> {
    match handled {
        Handled::Done(value) => render(value).map(Handled::Done),
        Handled::Invalid(errors) => Ok(Handled::Invalid(errors)),
        Handled::Alerted => Ok(Handled::Alerted),
    }
}

fn render_fees(view: FeesView, cli: &CliConfig, config: &StorefrontConfig) -> Result<()> {
    if cli.json {
        print_json(&view)
    } else {
        print_fees(&view, config);
        Ok(())
    }
}

async fn run(app: &CliStorefront, cli: &CliConfig, config: &StorefrontConfig) -> Result<i32> {
    let catalog = *app.enrollment().catalog();

    let handled = match &cli.command {
        Command::Courses { group } => {
            let groups: Vec<CourseGroup> = match group {
                Some(group) => vec![*group],
                None => CourseGroup::ALL.to_vec(),
            };
            if cli.json {
                let courses: Vec<CourseSummary> = groups
                    .iter()
                    .flat_map(|g| catalog.courses_in(*g))
                    .map(|c| CourseSummary {
                        name: c.name,
                        price: c.price,
                        group: c.group,
                    })
                    .collect();
                print_json(&courses)?;
            } else {
                for group in groups {
                    app.open(Screen::course_list(group));
                    println!("{}", group.title());
                    for course in catalog.courses_in(group) {
                        println!("  {} - Price: {}", course.name, format_money(course.price, config));
                    }
                }
            }
            Handled::Done(())
        }
        Command::Details { course } => {
            app.open(route(&catalog, "CourseDetails", Some(course.as_str()))?);
            finish(app.open_course(course).await?, |view| {
                if cli.json {
                    return print_json(&view);
                }
                println!("{} - {}", view.name, format_money(view.price, config));
                println!("Objective: {}", view.purpose);
                println!("Topics Covered: {}", view.topics.join(", "));
                println!("[{}]", view.action_label());
                Ok(())
            })?
        }
        Command::Enroll { course } => finish(app.enroll(course).await?, |enrolled| {
            if enrolled {
                println!("✅ Selected {}", course);
            } else {
                println!("Deselected {}", course);
            }
            Ok(())
        })?,
        Command::Remove { course } => finish(app.remove_from_fees(course).await?, |view| {
            render_fees(view, cli, config)
        })?,
        Command::Fees => {
            app.open(Screen::CalculateFees);
            finish(app.open_fees().await?, |view| render_fees(view, cli, config))?
        }
        Command::Checkout => finish(app.checkout().await?, |receipt| {
            if cli.json {
                return print_json(&receipt);
            }
            println!(
                "Paid {} for {} course(s) at {}",
                format_money(receipt.total(), config),
                receipt.courses.len(),
                receipt.issued_at.format("%Y-%m-%d %H:%M:%S UTC")
            );
            Ok(())
        })?,
        Command::Open { screen, course } => {
            let screen = route(&catalog, screen, course.as_deref())?;
            println!("{}", screen);
            app.open(screen);
            Handled::Done(())
        }
        Command::Register {
            username,
            email,
            password,
            confirm_password,
        } => {
            let form = RegistrationForm {
                username: username.clone(),
                email: email.clone(),
                password: password.clone(),
                confirm_password: confirm_password.clone(),
            };
            app.register(&form).await?.map_done(|_| ())
        }
        Command::Login { username, password } => {
            app.login(username, password).await?.map_done(|_| ())
        }
    };

    match handled {
        Handled::Done(()) => Ok(0),
        Handled::Invalid(errors) => {
            for (field, message) in &errors.fields {
                eprintln!("❌ {}: {}", field, message);
            }
            Ok(1)
        }
        Handled::Alerted => Ok(HANDLED_FAILURE),
    }
}
