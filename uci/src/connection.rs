use super::commands::{UciInput, UciOutput};
use super::decoder::Decoder;
use super::encoder::Encoder;
use log::debug;
use std::error::Error;
use std::io::{self, BufRead};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread::{self, JoinHandle};

pub struct UciConnection {
    output_tx: Sender<UciOutput>,
    output_handle: JoinHandle<()>,
}

impl Default for UciConnection {
    fn default() -> Self {
        Self::new()
    }
}

impl UciConnection {
    pub fn new() -> Self {
        // Create a channel for UCI outputs
        let (output_tx, output_rx) = channel();

        // Spawn a thread to handle output printing
        let output_handle = Self::spawn_output_handler(output_rx);

        Self {
            output_tx,
            output_handle,
        }
    }

    // Takes a callback function that handles commands and returns a sender for responses.
    // Returns once "quit" is received or stdin closes, after all output is flushed.
    pub fn listen<F>(self, mut callback: F) -> io::Result<()>
    where
        F: FnMut(&UciInput, &Sender<UciOutput>) -> Result<(), Box<dyn Error>>,
    {
        let decoder = Decoder::new();
        let stdin = io::stdin();
        let mut reader = stdin.lock();

        loop {
            let mut in_line = String::new();
            if reader.read_line(&mut in_line)? == 0 {
                debug!("Input closed");
                break;
            }

            let in_line = in_line.trim();
            debug!("Input: {:?}", in_line);

            let input = decoder.decode(in_line);

            // Handle potential errors from callback
            if let Err(e) = callback(&input, &self.output_tx) {
                debug!("Callback error: {:?}", e);
            }

            if matches!(input, UciInput::Quit) {
                break;
            }
        }

        // Closing the channel lets the output thread drain and exit
        drop(self.output_tx);
        if self.output_handle.join().is_err() {
            debug!("Output thread panicked");
        }

        Ok(())
    }

    fn spawn_output_handler(output_rx: Receiver<UciOutput>) -> JoinHandle<()> {
        thread::spawn(move || {
            let encoder = Encoder {};

            while let Ok(output) = output_rx.recv() {
                let out_line = encoder.encode(&output);
                debug!("Output: {:?}", out_line);
                println!("{}", out_line);
            }
        })
    }
}
