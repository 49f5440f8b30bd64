use kandil_core::Company;

pub fn all() -> Vec<Company> {
    let rows: [(&str, &str, &str, &str); 12] = [
        (
            "AAPL",
            "Apple Inc.",
            "Technology",
            "Designs, manufactures, and markets smartphones, personal computers, tablets, wearables, and accessories worldwide.",
        ),
        (
            "MSFT",
            "Microsoft Corporation",
            "Technology",
            "Develops, licenses, and supports software, services, devices, and solutions worldwide.",
        ),
        (
            "GOOGL",
            "Alphabet Inc.",
            "Technology",
            "Provides online advertising services in the United States, Europe, the Middle East, Africa, the Asia-Pacific, Canada, and Latin America.",
        ),
        (
            "AMZN",
            "Amazon.com Inc.",
            "Consumer Discretionary",
            "Engages in the retail sale of consumer products and subscriptions in North America and internationally.",
        ),
        (
            "TSLA",
            "Tesla Inc.",
            "Consumer Discretionary",
            "Designs, develops, manufactures, leases, and sells electric vehicles, and energy generation and storage systems.",
        ),
        (
            "NVDA",
            "NVIDIA Corporation",
            "Technology",
            "Designs, develops, and manufactures computer graphics processors, chipsets, and related multimedia software.",
        ),
        (
            "META",
            "Meta Platforms Inc.",
            "Technology",
            "Develops products that enable people to connect and share with friends and family through mobile devices, personal computers, virtual reality headsets, and wearables worldwide.",
        ),
        (
            "NFLX",
            "Netflix Inc.",
            "Communication Services",
            "Provides entertainment services. It offers TV series, documentaries, and feature films across various genres and languages.",
        ),
        (
            "JPM",
            "JPMorgan Chase & Co.",
            "Financial Services",
            "Operates as a financial services company worldwide. It operates through Consumer & Community Banking, Corporate & Investment Bank, Commercial Banking, and Asset & Wealth Management segments.",
        ),
        (
            "JNJ",
            "Johnson & Johnson",
            "Healthcare",
            "Researches, develops, manufactures, and sells various products in the healthcare field worldwide.",
        ),
        (
            "V",
            "Visa Inc.",
            "Financial Services",
            "Operates as a payments technology company worldwide. It facilitates digital payments among consumers, merchants, financial institutions, businesses, strategic partners, and government entities.",
        ),
        (
            "PG",
            "Procter & Gamble Co.",
            "Consumer Staples",
            "Provides branded consumer packaged goods to consumers through retailers and wholesalers worldwide.",
        ),
    ];

    rows.into_iter()
        .enumerate()
        .map(|(i, (symbol, name, sector, description))| Company {
            id: i as u32 + 1,
            symbol: symbol.to_string(),
            name: name.to_string(),
            sector: sector.to_string(),
            description: Some(description.to_string()),
        })
        .collect()
}
