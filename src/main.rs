use objectstream::error::SystemError;
use objectstream::models::raspberry::Raspberry;
use objectstream::models::season::Season;
use objectstream::stream::object_input_stream::ObjectInputStream;
use objectstream::stream::object_output_stream::ObjectOutputStream;
use tracing::info;

// Serializes a Raspberry, then fails to deserialize it: the Fruit ancestor
// is not serializable and has no zero-argument constructor. The resulting
// ClassInstantiation error is the expected outcome, so it propagates out of
// main and the process exits non-zero.
fn main() -> Result<(), SystemError> {
    tracing_subscriber::fmt::init();
    info!("Starting non-serializable ancestor demo...");

    let raspberry = Raspberry::new(Season::Fall, "Fall Gold");
    let mut output = ObjectOutputStream::new();
    output.write_object(&raspberry);
    let serialized_fruit_bytes = output.into_bytes();
    println!("Serialized {} bytes.", serialized_fruit_bytes.len());

    println!("Deserializing...");
    let mut input = ObjectInputStream::new(&serialized_fruit_bytes)?;
    let raspberry: Raspberry = input.read_object()?;

    // Never reached with the current Fruit descriptor.
    println!("Deserialized: {raspberry}");
    Ok(())
}
