use dilemmalib::{
    formats::{csv::Csv, text::Text},
    strategy::recursive::RecursiveStrategy,
    traits::{ReadInput, Strategy, WriteSolution},
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Пример: CSV на stdin -> решение текстом на stdout
    let input = Csv::read(std::io::BufReader::new(std::io::stdin()))?;
    let solution = RecursiveStrategy::new().find_solution(&input)?;
    Text::write(std::io::stdout(), solution.as_ref())?;
    Ok(())
}
