use anyhow::Result;
use dense_matrix::Matrix;
use log::LevelFilter;

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("DENSE_MATRIX_LOG", "error,dense_matrix=info"))
        .init();

    let a = Matrix::from([[1.0, 3.0, 2.0], [4.0, 0.0, 1.0]]);
    let b = Matrix::from([[1.0, 3.0], [0.0, 1.0], [5.0, 2.0]]);

    println!("A =\n{}", a);
    println!("B =\n{}", b);

    let product = a.multiply(&b)?;
    println!("A * B =\n{}", product);

    let sum = a.add(&b.transpose())?;
    println!("A + B^T =\n{}", sum);

    println!("2.5 * A =\n{}", &a * 2.5);
    println!("I(3) =\n{}", Matrix::identity(3));
    println!("max(A) = {}, min(A) = {}", a.max(), a.min());

    // A (2x3) times itself is not defined
    match a.multiply(&a) {
        Ok(_) => unreachable!(),
        Err(e) => println!("expected failure: {}", e),
    }

    println!("{}", serde_json::to_string_pretty(&product)?);

    Ok(())
}
