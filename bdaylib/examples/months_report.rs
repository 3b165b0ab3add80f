use bdaylib::{formats::json::Json, queries::months, traits::ReadPhonebook};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Пример: телефонная книга JSON из stdin -> список месяцев в stdout
    let phone_list = Json::read(std::io::BufReader::new(std::io::stdin()))?;
    let groups = months::get_months_list(&phone_list);
    serde_json::to_writer_pretty(std::io::stdout(), &groups)?;
    Ok(())
}
