//! Invoice dashboard: analytics over the seed data, a protocol attachment and
//! a new report

use labdesk::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("📊 labdesk: invoice dashboard\n");

    let config = LabConfig::default_config();
    let mut book = InvoiceBook::seeded();
    let today = NaiveDate::from_ymd_opt(2024, 12, 10).unwrap_or_default();

    let filter = InvoiceFilter::new(StatusFilter::All, "Здоровье", DateRange::All);
    let snapshot = DashboardSnapshot::compute(book.invoices(), &filter, today, config.top_n);

    println!("🔎 Search \"Здоровье\":");
    for invoice in &snapshot.filtered {
        println!(
            "   {} {} {:.0} ₽ [{}]",
            invoice.id,
            invoice.client,
            invoice.amount,
            invoice.status.label()
        );
    }

    println!("\n🏆 Top clients:");
    for stat in &snapshot.top_clients {
        println!("   {} × {} = {:.0} ₽", stat.name, stat.count, stat.total);
    }

    println!("\n⚠️  Top debtors:");
    for invoice in &snapshot.top_debtors {
        println!("   {} {:.0} ₽ ({})", invoice.client, invoice.amount, invoice.status.label());
    }

    println!("\n🧾 Top services:");
    for stat in &snapshot.top_services {
        println!("   {} × {}", stat.name, stat.count);
    }

    let totals = &snapshot.totals;
    println!(
        "\n💰 Оплачено {:.0} ₽, ожидает {:.0} ₽, просрочено {:.0} ₽ ({} неоплаченных)",
        totals.paid, totals.pending, totals.overdue, totals.unpaid_count
    );
    for month in &snapshot.monthly {
        println!(
            "   {}-{:02}: оплачено {:.0}, к оплате {:.0}",
            month.year, month.month, month.paid, month.outstanding
        );
    }

    let mut protocol = ProtocolForm::new(today);
    protocol.number = "П-1024".to_string();
    protocol.performer = "Петров П.П.".to_string();
    protocol.choose_methodology(&config, 0);
    protocol.result = "Соответствует".to_string();
    let notice = match protocol.submit(&mut book, "2024-0160", "УЗИ", today) {
        Ok(notice) => notice,
        Err(e) => Notice::from_error(&e),
    };
    println!("\n📎 {}: {}", notice.title, notice.description);

    let mut draft = ReportDraft::new(today);
    draft.is_new_client = true;
    draft.new_client = "ООО \"Стройбетон\"".to_string();
    draft.toggle_service(4);
    draft.toggle_service(6);
    draft.update_quantity(6, 3);
    println!("\n📝 Draft total: {:.0} ₽", draft.total(&config.price_list));

    let notice = match draft.submit(&mut book, &config) {
        Ok(notice) => notice,
        Err(e) => Notice::from_error(&e),
    };
    println!("✅ {}: {}", notice.title, notice.description);
    println!("   Invoices in book: {}", book.len());

    Ok(())
}
