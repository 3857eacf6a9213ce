use clap::Parser;
use pp_quest::adapters::memory::{InMemoryOrderRepository, InMemoryRowStore, InMemoryUserDao};
use pp_quest::app::patterns::dao::SignupService;
use pp_quest::app::patterns::data_mapper::UserMapper;
use pp_quest::app::patterns::decorator::{footed, BasicReport, Report, WithFooter, WithHeader};
use pp_quest::app::patterns::repository::{place_order, UserRepository};
use pp_quest::app::patterns::strategy::{CustomerTier, DiscountCalculator};
use pp_quest::domain::model::User;
use pp_quest::domain::ports::OrderRepository;
use pp_quest::utils::logger;

#[derive(Parser)]
#[command(name = "patterns-demo")]
#[command(about = "Walks through the data-access and refactoring pattern examples")]
struct Args {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init_cli_logger(args.verbose, "info");

    println!("📦 DAO");
    let mut signup = SignupService::new(InMemoryUserDao::new());
    let id = signup.sign_up("Lucas", "lucas@email.com")?;
    println!("  User saved with id {}", id);

    println!("\n🗺️ DATA MAPPER");
    let mut mapper = UserMapper::new(InMemoryRowStore::new());
    let id = mapper.insert(&User::new("Lucas", "lucas@email.com"))?;
    if let Some(user) = mapper.find_by_id(id)? {
        println!("  Row {} maps back to {} <{}>", id, user.name, user.email);
    }

    println!("\n📚 REPOSITORY");
    let mut users = UserRepository::new(UserMapper::new(InMemoryRowStore::new()));
    let id = users.register(&User::new("Lucas", "lucas@email.com"))?;
    println!("  Registered: {}", users.get(id)?.name);
    if let Err(e) = users.register(&User::new("Nobody", "")) {
        println!("  Rejected: {}", e.user_friendly_message());
    }

    let mut orders = InMemoryOrderRepository::new();
    let order_id = place_order(&mut orders, &[("Notebook", 1), ("Mouse", 2)])?;
    if let Some(order) = orders.find_by_id(order_id)? {
        println!(
            "  Order {} stored with {} items ({} units)",
            order.id(),
            order.items().len(),
            order.total_quantity()
        );
    }
    if let Err(e) = place_order(&mut orders, &[("Keyboard", 0)]) {
        println!("  Rejected: {}", e.user_friendly_message());
    }

    println!("\n🎯 STRATEGY");
    for tier in [CustomerTier::Vip, CustomerTier::Regular, CustomerTier::Guest] {
        let calculator = DiscountCalculator::for_tier(tier);
        println!("  {:?}: 100.00 -> {:.2}", tier, calculator.calculate(100.0));
    }

    println!("\n🎀 DECORATOR");
    let report = WithFooter::new(WithHeader::new(BasicReport));
    println!("{}", report.generate());
    println!("---");
    println!("{}", footed(|| "Ad-hoc summary".to_string()).generate());

    Ok(())
}
