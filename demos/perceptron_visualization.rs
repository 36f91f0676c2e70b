use perceptron_viz::plot::save_svg;
use perceptron_viz::{Dataset, Perceptron, PlotConfig};

const N_POINTS: usize = 100;
const LOW: f32 = -10.0;
const HIGH: f32 = 10.0;
const OUTPUT: &str = "./perceptron_visualization.svg";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Perceptron Visualization ===\n");

    let mut rng = rand::thread_rng();

    // Random weights only; the perceptron is never trained here.
    let perceptron = Perceptron::with_rng(2, 0.1, &mut rng);
    println!("Weights: {:?}", perceptron.weights());
    println!("Learning rate: {}", perceptron.learning_rate());

    let dataset = Dataset::classify_uniform(&perceptron, N_POINTS, LOW, HIGH, &mut rng)?;
    let (class_0, class_1) = dataset.class_counts();

    println!("\nClassified {} points in [{}, {}):", dataset.n_samples(), LOW, HIGH);
    println!("Class 0 (blue): {}", class_0);
    println!("Class 1 (red): {}", class_1);

    save_svg(OUTPUT, &PlotConfig::new(), dataset.points()?)?;
    println!("\nPlot written to {}", OUTPUT);

    Ok(())
}
