//! Plain-text rendering of book cards

use readinglist_core::BookCard;

/// Compact card used in result lists
pub fn print_card_summary(card: &BookCard) {
    match &card.lexile {
        Some(badge) => println!("#{:<4} {}  [{}]", card.id.get(), card.title, badge.code),
        None => println!("#{:<4} {}", card.id.get(), card.title),
    }
    println!("      by {}", card.author);
    if !card.tags.is_empty() {
        println!("      tags: {}", card.tags.join(", "));
    }
}

/// Full card with reading level, cover candidates and links
pub fn print_card_detail(card: &BookCard) {
    println!("Title:       {}", card.title);
    println!("Author:      {}", card.author);
    if let Some(desc) = &card.description {
        println!("Description: \"{}\"", desc);
    }
    if !card.tags.is_empty() {
        println!("Tags:        {}", card.tags.join(", "));
    }
    if let Some(badge) = &card.lexile {
        println!("Lexile:      {}", badge.code);
        println!("  {}", badge.explanation.title);
        println!("  {}", badge.explanation.description);
        println!("  Reading level: {}", badge.explanation.reading_level);
    }
    println!("Cover:       {}", card.cover.current().url());
    let fallbacks = &card.cover.candidates()[1..];
    for source in fallbacks.iter().filter(|s| !s.is_placeholder()) {
        println!("  fallback:  {}", source.url());
    }
    println!("Links:");
    for link in &card.links {
        println!("  {:<14} {}", format!("{}:", link.label), link.url);
    }
}
