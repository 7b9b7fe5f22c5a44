pub(crate) trait UserInterface {
    fn print(&self, message: String);
}

#[derive(Default)]
pub(crate) struct ConsoleInterface {}

impl UserInterface for ConsoleInterface {
    fn print(&self, message: String) {
        println!("{message}");
    }
}

#[cfg(test)]
pub(crate) mod util {
    use super::UserInterface;
    use std::sync::mpsc;

    pub(crate) fn channel_interface() -> (SenderInterface, ReceiverInterface) {
        let (message_tx, message_rx) = mpsc::channel();
        (SenderInterface { message_tx }, ReceiverInterface { message_rx })
    }

    pub(crate) struct SenderInterface {
        message_tx: mpsc::Sender<Option<String>>,
    }

    impl Drop for SenderInterface {
        fn drop(&mut self) {
            self.message_tx.send(None).unwrap();
        }
    }

    impl UserInterface for SenderInterface {
        fn print(&self, message: String) {
            // Allows for print() to be called many times, with the receiver concatenating the messages.
            self.message_tx.send(Some(message)).unwrap();
        }
    }

    pub(crate) struct ReceiverInterface {
        message_rx: mpsc::Receiver<Option<String>>,
    }

    impl ReceiverInterface {
        pub(crate) fn consume_message(self) -> String {
            let mut values = Vec::default();

            loop {
                match self.message_rx.recv().unwrap() {
                    Some(message) => values.push(message),
                    None => break,
                }
            }

            values.join("\n")
        }
    }
}
